//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `--config <path>` if given
//! 2. `$PHONEDECK_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/phonedeck/config.toml`
//! 4. `~/.phonedeck/config.toml`
//!
//! # Validation
//!
//! Config values are validated after parsing (e.g., the server URL must be
//! an http(s) URL).

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Console configuration.
///
/// # Example
///
/// ```toml
/// server_url = "http://127.0.0.1:5000/"
/// help_file = "help.yaml"
/// prompt = "cmd >> "
/// password_gate = true
/// request_timeout_secs = 30
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Base URL of the device service
    pub server_url: Option<String>,

    /// Path of the YAML help file
    pub help_file: Option<String>,

    /// Prompt shown before each command
    pub prompt: Option<String>,

    /// Ask for the device password before the session starts
    pub password_gate: Option<bool>,

    /// Per-request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

impl ConsoleConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            validate_server_url(url)?;
        }

        if let Some(prompt) = &self.prompt {
            if prompt.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "prompt cannot be empty".to_string(),
                ));
            }
        }

        if let Some(help_file) = &self.help_file {
            if help_file.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "help_file cannot be empty".to_string(),
                ));
            }
        }

        if self.request_timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

/// Check that a server URL is an absolute http(s) URL.
pub fn validate_server_url(url: &str) -> Result<(), ConfigError> {
    let valid = ["http://", "https://"]
        .iter()
        .any(|scheme| url.starts_with(scheme) && url.len() > scheme.len());

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue(format!(
            "invalid server_url '{}', must start with http:// or https://",
            url
        )))
    }
}
