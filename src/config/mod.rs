mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const MISSING_API_KEY: &str =
    "Missing OpenAI API Key. Set OPENAI_API_KEY in your environment variables.";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(Path::new(&config_path), env::var(API_KEY_ENV).ok()).await
}

/// Loads `path` if it exists and combines it with `api_key`.
pub async fn load_from(path: &Path, api_key: Option<String>) -> Result<Config> {
    let config_str = if tokio::fs::try_exists(path).await? {
        debug!("Loading configuration from: {}", path.display());
        Some(tokio::fs::read_to_string(path).await?)
    } else {
        debug!("No configuration file at {}, using defaults", path.display());
        None
    };

    Config::from_parts(config_str.as_deref(), api_key)
}

impl Config {
    /// Resolves a configuration from optional YAML text and an API key.
    ///
    /// Fails when the key is absent or empty; nothing else is validated here.
    pub fn from_parts(yaml: Option<&str>, api_key: Option<String>) -> Result<Self> {
        let mut config: Config = match yaml {
            Some(text) if !text.trim().is_empty() => serde_yaml::from_str(text)?,
            _ => Config::default(),
        };

        config.llm.api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::config(MISSING_API_KEY))?;

        Ok(config)
    }
}
