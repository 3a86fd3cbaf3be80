use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::artifact::ArtifactKind;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub ai: AIConfig,
    pub generator: GeneratorConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AIConfig {
    pub provider: AIProvider,
    pub model: String,
    pub max_tokens: u32,
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    #[serde(skip)]
    pub api_url: Option<String>,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            provider: AIProvider::Anthropic,
            model: "claude-3-opus-20240229".to_string(),
            max_tokens: 4000,
            anthropic_api_key: None,
            openai_api_key: None,
            api_url: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum AIProvider {
    Anthropic,
    OpenAI,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeneratorConfig {
    /// Artifact kinds used when the CLI does not name any.
    pub default_kinds: Vec<ArtifactKind>,
    /// Directory generated files are written into, when set.
    pub output_dir: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_kinds: vec![
                ArtifactKind::Model,
                ArtifactKind::Migration,
                ArtifactKind::Controller,
            ],
            output_dir: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub theme: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            theme: "dark".to_string(),
        }
    }
}

impl Config {
    pub fn create_default(path: &Path) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// API keys can live in the environment instead of the config file;
    /// the file wins when both are present.
    fn apply_env_overrides(&mut self) {
        if self.ai.anthropic_api_key.is_none() {
            self.ai.anthropic_api_key = std::env::var("ANTHROPIC_API_KEY").ok();
        }
        if self.ai.openai_api_key.is_none() {
            self.ai.openai_api_key = std::env::var("OPENAI_API_KEY").ok();
        }
    }

    pub fn ensure_config_exists() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            println!("Creating default config at {:?}", config_path);
            Self::create_default(&config_path)?;
            println!("Please add your API key to the config file");
            std::process::exit(1);
        }

        let config = Self::load(&config_path)?;

        if config.ai.anthropic_api_key.is_none() && config.ai.openai_api_key.is_none() {
            println!("No API key found in config at {:?}", config_path);
            println!("Please add either ANTHROPIC_API_KEY or OPENAI_API_KEY");
            std::process::exit(1);
        }

        Ok(config)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "laragen", "laragen")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    Ok(proj_dirs.config_dir().join("config.toml"))
}
