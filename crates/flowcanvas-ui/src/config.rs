//! Application configuration.
//!
//! Parsed from the embedded `config/default.toml`; the API base URL can be
//! overridden at build time with `FLOWCANVAS_API_URL`.

use flowcanvas_core::EditorConfig;
use serde::Deserialize;

use crate::error::{Result, UiError};

const DEFAULT_CONFIG: &str = include_str!("../config/default.toml");

/// Settings for the browser editor
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Base URL of the workflow REST API
    pub api_url: String,
    /// `tracing` filter directive for the console logger
    pub log_filter: String,
    pub editor: EditorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000/api".to_string(),
            log_filter: "info".to_string(),
            editor: EditorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parses a TOML document and applies the build-time API override.
    ///
    /// # Errors
    /// Returns [`UiError::Config`] for malformed TOML or out-of-range editor
    /// settings.
    pub fn from_toml_str(source: &str, api_override: Option<&str>) -> Result<Self> {
        let mut config: Self =
            toml::from_str(source).map_err(|e| UiError::Config(e.to_string()))?;
        config.editor = config
            .editor
            .validate()
            .map_err(|e| UiError::Config(e.to_string()))?;
        if let Some(url) = api_override.filter(|url| !url.trim().is_empty()) {
            config.api_url = url.to_string();
        }
        if config.api_url.trim().is_empty() {
            return Err(UiError::Config("api_url cannot be empty".to_string()));
        }
        Ok(config)
    }

    /// The embedded configuration, or the defaults if it is unusable
    #[must_use]
    pub fn load() -> Self {
        Self::from_toml_str(DEFAULT_CONFIG, option_env!("FLOWCANVAS_API_URL")).unwrap_or_else(
            |err| {
                tracing::warn!(error = %err, "Falling back to default configuration");
                Self::default()
            },
        )
    }
}
