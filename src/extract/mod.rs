//! Turns one opaque block of generated text into named, normalized file
//! records. Pure and stateless: no I/O, no cross-call state, safe to call
//! concurrently for unrelated requests.

mod fences;
mod namer;
mod normalize;
pub(crate) mod strategies;

pub use fences::{scan_fenced_blocks, FencedBlock};
pub use namer::Namer;
pub use normalize::{normalize_body, Language};
pub use strategies::{run_chain, Candidate, SourceStrategy};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A ready-to-paste generated file. Filenames carry no path separators;
/// content is normalized; language reflects the final filename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub filename: String,
    pub content: String,
    pub language: Language,
}

impl FileRecord {
    /// The surrogate record shown when the collaborator call itself fails.
    /// The output surface renders it like any other file, so a failure can
    /// never reach the user as an unhandled error.
    pub fn diagnostic(message: impl Into<String>) -> Self {
        FileRecord {
            filename: "generation_error.txt".to_string(),
            content: message.into(),
            language: Language::Text,
        }
    }
}

/// Run the full pipeline: recognize candidates, resolve filenames,
/// normalize bodies, tag languages. Returns at least one record for any
/// input, the whole reply included verbatim in the worst case.
pub fn extract_files(text: &str, resource: Option<&str>) -> Vec<FileRecord> {
    let (strategy, candidates) = run_chain(text);

    if strategy.is_degraded() {
        warn!(
            strategy = strategy.name(),
            candidates = candidates.len(),
            "no declared file structure recognized, extraction degraded"
        );
    } else {
        debug!(
            strategy = strategy.name(),
            candidates = candidates.len(),
            "extraction strategy selected"
        );
    }

    let mut namer = Namer::new(resource);
    candidates
        .into_iter()
        .map(|candidate| {
            let filename = namer.resolve(&candidate);
            let content = normalize_body(&candidate.body);
            let language = Language::from_filename(&filename);
            FileRecord {
                filename,
                content,
                language,
            }
        })
        .collect()
}
