// Configuration module

mod models;

pub use models::*;

use crate::error::{ExtractError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file
    /// 3. Defaults (lowest)
    ///
    /// The upstream credential is additionally read from `GEMINI_API_KEY`,
    /// matching the deployment convention of the original hosted function.
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(File::with_name(&Self::default_config_path()).required(false))
            // Override with environment variables (prefix: GENSEN_EXTRACT_)
            .add_source(Environment::with_prefix("GENSEN_EXTRACT").separator("__"))
            .build()
            .map_err(|e| ExtractError::Config(e.to_string()))?;

        let mut config: Self = config
            .try_deserialize()
            .map_err(|e| ExtractError::Config(e.to_string()))?;

        if config.gemini.api_key.is_none() {
            config.gemini.api_key = std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty());
        }

        Ok(config)
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".gensen-extract")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
