// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{HubError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file (`--config` path, or the default location)
    /// 3. Defaults (lowest)
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let file_source = match config_path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(&Self::default_config_path()).required(false),
        };

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(file_source)
            // Override with environment variables (prefix: WIKI2BRIEF)
            // e.g. WIKI2BRIEF__SERVER__PORT=8080
            //      WIKI2BRIEF__MISTRAL__API_KEYS=key1,key2,key3
            .add_source(
                Environment::with_prefix("WIKI2BRIEF")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("mistral.api_keys"),
            )
            .build()
            .map_err(|e| HubError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| HubError::Config(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".wiki2brief")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
