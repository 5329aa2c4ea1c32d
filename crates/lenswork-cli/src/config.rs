//! CLI configuration (~/.lenswork/config.toml).

use lenswork_core::paths;
use serde::Deserialize;

const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    /// API key for the description provider.
    #[serde(default)]
    pub gemini_api_key: Option<String>,
}

impl CliConfig {
    /// Load the config file, falling back to defaults when absent or invalid.
    pub fn load() -> Self {
        let Ok(path) = paths::config_path() else {
            return Self::default();
        };
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        toml::from_str(&raw).unwrap_or_default()
    }

    /// Configured API key, with the environment taking precedence.
    pub fn gemini_api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.gemini_api_key.clone())
    }
}
