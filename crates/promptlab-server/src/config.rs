//! Server configuration
//!
//! Values come from Shuttle secrets (`Secrets.toml` locally).

use anyhow::{bail, Result};

const STRICT_CONTENT_KEY: &str = "PROMPTLAB_STRICT_CONTENT";
const SWAGGER_UI_KEY: &str = "PROMPTLAB_SWAGGER_UI";

/// Runtime configuration for the API server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Require prompt content to be at least 10 non-blank characters
    pub strict_content: bool,
    /// Serve Swagger UI and the OpenAPI document
    pub swagger_ui: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            strict_content: false,
            swagger_ui: true,
        }
    }
}

impl AppConfig {
    /// Load from the Shuttle secret store
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Result<Self> {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Load from any key lookup; missing keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let strict_content = match lookup(STRICT_CONTENT_KEY) {
            Some(raw) => parse_bool(STRICT_CONTENT_KEY, &raw)?,
            None => defaults.strict_content,
        };
        let swagger_ui = match lookup(SWAGGER_UI_KEY) {
            Some(raw) => parse_bool(SWAGGER_UI_KEY, &raw)?,
            None => defaults.swagger_ui,
        };

        Ok(Self {
            strict_content,
            swagger_ui,
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => bail!("{key} must be a boolean, got {other:?}"),
    }
}
