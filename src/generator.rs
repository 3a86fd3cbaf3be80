use tracing::{error, info};

use crate::ai;
use crate::artifact::GenerationRequest;
use crate::config::Config;
use crate::extract::{self, FileRecord};
use crate::prompt::PromptBuilder;

/// Run one request end to end: compose the prompt, call the generation
/// service, extract files from the reply.
///
/// Infallible by contract with the display layer — a collaborator failure
/// becomes a single diagnostic record, so the returned batch is never
/// empty and never panics the caller.
pub async fn generate(request: &GenerationRequest, config: &Config) -> Vec<FileRecord> {
    let prompt = PromptBuilder::build(request);
    info!(prompt_chars = prompt.len(), "requesting generation");

    match ai::generate_text(&prompt, config).await {
        Ok(text) => {
            let files = extract::extract_files(&text, request.resource_name());
            info!(files = files.len(), "extraction complete");
            files
        }
        Err(e) => {
            error!(error = %e, "generation request failed");
            vec![FileRecord::diagnostic(format!(
                "Code generation failed: {}\n\nCheck your API key and network connection, then try again.",
                e
            ))]
        }
    }
}
