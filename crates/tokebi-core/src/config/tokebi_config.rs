//! Top-level client configuration.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::PLACEHOLDER_API_KEY;
use crate::errors::ConfigError;
use crate::models::Environment;

/// Everything the host hands the client at startup.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TOKEBI_*`)
/// 2. TOML file passed to [`TokebiConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokebiConfig {
    /// Raw API key sent as the `Authorization` header.
    pub api_key: String,
    /// Display name override. Falls back to the host's title.
    pub game_name: Option<String>,
    pub tracking_enabled: bool,
    /// Verbose client logging.
    pub debug_mode: bool,
    /// Base URL of the analytics service, without a trailing path.
    pub endpoint: String,
    /// Reported as `rpgmakerVersion` at registration.
    pub engine_version: String,
    /// Location the game was loaded from, used for environment detection.
    pub page_url: Option<String>,
    /// Forces the reported environment, skipping detection.
    pub environment: Option<Environment>,
    pub request_timeout_secs: u64,
    /// Path of the JSON file used to persist the player id.
    pub storage_path: Option<String>,
}

impl Default for TokebiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            game_name: None,
            tracking_enabled: defaults::DEFAULT_TRACKING_ENABLED,
            debug_mode: defaults::DEFAULT_DEBUG_MODE,
            endpoint: defaults::DEFAULT_ENDPOINT.to_string(),
            engine_version: defaults::DEFAULT_ENGINE_VERSION.to_string(),
            page_url: None,
            environment: None,
            request_timeout_secs: defaults::DEFAULT_REQUEST_TIMEOUT_SECS,
            storage_path: None,
        }
    }
}

impl TokebiConfig {
    /// Load configuration: defaults, then the TOML file at `path` (if any),
    /// then `TOKEBI_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    })?;
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Build a config from the string parameters of the plugin host's
    /// config panel. Booleans are set only by the exact string `"true"`.
    pub fn from_plugin_parameters(params: &HashMap<String, String>) -> Self {
        let flag = |name: &str| params.get(name).is_some_and(|v| v == "true");

        Self {
            api_key: params
                .get(defaults::PARAM_API_KEY)
                .cloned()
                .unwrap_or_default(),
            game_name: params
                .get(defaults::PARAM_GAME_NAME)
                .filter(|v| !v.is_empty())
                .cloned(),
            tracking_enabled: flag(defaults::PARAM_TRACKING_ENABLED),
            debug_mode: flag(defaults::PARAM_DEBUG_MODE),
            ..Self::default()
        }
    }

    /// Apply `TOKEBI_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary variable lookup.
    /// Unparseable booleans are ignored.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(v) = lookup(defaults::ENV_API_KEY) {
            self.api_key = v;
        }
        if let Some(v) = lookup(defaults::ENV_GAME_NAME) {
            self.game_name = Some(v).filter(|v| !v.is_empty());
        }
        if let Some(v) = lookup(defaults::ENV_TRACKING_ENABLED).and_then(|v| v.parse().ok()) {
            self.tracking_enabled = v;
        }
        if let Some(v) = lookup(defaults::ENV_DEBUG_MODE).and_then(|v| v.parse().ok()) {
            self.debug_mode = v;
        }
        if let Some(v) = lookup(defaults::ENV_ENDPOINT) {
            self.endpoint = v;
        }
    }

    /// Validate the non-credential values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ConfigError::ValidationFailed {
                field: "endpoint".to_string(),
                message: "must be an http:// or https:// URL".to_string(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "request_timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Reject a missing or placeholder API key. Without a credential no
    /// tracking is possible, so this is fatal to client startup.
    pub fn validate_api_key(&self) -> Result<(), ConfigError> {
        let key = self.api_key.trim();
        if key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if key == PLACEHOLDER_API_KEY {
            return Err(ConfigError::PlaceholderApiKey {
                key: key.to_string(),
            });
        }
        Ok(())
    }

    /// Name reported at registration: the override, else the host's title,
    /// else a generic default.
    pub fn effective_game_name(&self, host_title: Option<&str>) -> String {
        self.game_name
            .as_deref()
            .or(host_title.filter(|t| !t.is_empty()))
            .unwrap_or(defaults::DEFAULT_GAME_NAME)
            .to_string()
    }

    /// Base endpoint without a trailing slash.
    pub fn endpoint_base(&self) -> &str {
        self.endpoint.trim_end_matches('/')
    }
}
