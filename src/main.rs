use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use laragen::artifact::{ArtifactKind, Field, GenerationRequest};
use laragen::config::{self, Config};
use laragen::theme::Theme;
use laragen::{generator, output};

#[derive(Parser)]
#[command(
    name = "laragen",
    version,
    about = "Generate ready-to-paste Laravel boilerplate with an AI backend"
)]
struct Cli {
    /// Write the generated files into this directory
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Print the extracted batch as JSON instead of rendered files
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate boilerplate for a named resource with typed fields
    Resource {
        /// Resource name in StudlyCase, e.g. BlogPost
        #[arg(long)]
        name: String,

        /// Field as name:type or name:type:opt1|opt2 (repeatable)
        #[arg(long = "field")]
        fields: Vec<Field>,

        /// Artifact kinds to generate, comma separated (defaults to the configured set)
        #[arg(long, value_delimiter = ',')]
        kinds: Vec<ArtifactKind>,
    },
    /// Generate a complete module from a free-form description
    Custom {
        /// What to build, in plain language
        description: String,
    },
    /// Create the default config file and exit
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let cli = Cli::parse();

    if matches!(&cli.command, Command::Init) {
        let config_path = config::get_config_path()?;
        Config::create_default(&config_path)?;
        println!("Created default config file at {:?}", config_path);
        println!("Add your API key there, or set ANTHROPIC_API_KEY / OPENAI_API_KEY.");
        return Ok(());
    }

    let config = Config::ensure_config_exists()?;
    if !config.display.color_output {
        colored::control::set_override(false);
    }
    let theme = Theme::from_name(&config.display.theme);

    let request = match cli.command {
        Command::Resource { name, fields, kinds } => {
            let kinds = if kinds.is_empty() {
                config.generator.default_kinds.clone()
            } else {
                kinds
            };
            GenerationRequest::resource(name, fields, kinds)?
        }
        Command::Custom { description } => GenerationRequest::custom(description)?,
        Command::Init => unreachable!("handled above"),
    };

    println!("{}", theme.banner.apply("Laragen - AI Laravel Boilerplate"));
    println!("Generating...\n");

    let files = generator::generate(&request, &config).await;

    if cli.json {
        println!("{}", output::render_json(&files)?);
    } else {
        output::render_batch(&files, &theme);
    }

    if let Some(dir) = cli.output.or_else(|| config.generator.output_dir.clone()) {
        output::write_batch(&files, &dir)?;
        println!("{} {:?}", "Wrote files to".green(), dir);
    }

    Ok(())
}
