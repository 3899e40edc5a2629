use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::shared::errors::AppError;
use crate::shared::types::FetcherConfig;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "Config.toml";

/// Config loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from Config.toml, falling back to defaults when the file is absent
    pub fn load_config() -> Result<FetcherConfig, AppError> {
        if !Path::new(DEFAULT_CONFIG_PATH).exists() {
            debug!(path = DEFAULT_CONFIG_PATH, "config file not found, using defaults");
            return Ok(FetcherConfig::default());
        }
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from an explicit path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<FetcherConfig, AppError> {
        let path = path.as_ref();
        let config_content = fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config = Self::parse(&config_content)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<FetcherConfig, AppError> {
        toml::from_str(content)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {}", e)))
    }
}
