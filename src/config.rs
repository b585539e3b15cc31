// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{Result, UtilError};
use crate::utils::validation::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_ACCEPT: &str = "application/vnd.github.v3+json";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub api_base_url: String,
    pub accept: String,
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            user_agent: format!("utilkit/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Layer defaults, an optional TOML file and `UTILKIT__*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = SearchConfig::default();
        let mut builder = config::Config::builder()
            .set_default("search.api_base_url", defaults.api_base_url)
            .and_then(|b| b.set_default("search.accept", defaults.accept))
            .and_then(|b| b.set_default("search.user_agent", defaults.user_agent))
            .map_err(|e| UtilError::Config(e.to_string()))?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("UTILKIT")
                .prefix_separator("__")
                .separator("__"),
        );

        let settings = builder
            .build()
            .map_err(|e| UtilError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| UtilError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            search: SearchConfig::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.search.api_base_url)
            .map_err(|e| UtilError::Config(e.to_string()))?;

        if self.search.user_agent.trim().is_empty() {
            return Err(UtilError::Config(
                "user_agent must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
