//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. An explicit path (`--config`); it must exist
//! 2. `$PHONEDECK_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/phonedeck/config.toml`
//! 4. `~/.phonedeck/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use phonedeck::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("Server: {}", config.server_url());
//! println!("Prompt: {:?}", config.prompt());
//! ```

pub mod schema;

pub use schema::ConsoleConfig;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "PHONEDECK_CONFIG";

/// Default device service URL.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000/";

/// Default help file, relative to the working directory.
pub const DEFAULT_HELP_FILE: &str = "help.yaml";

/// Default interactive prompt.
pub const DEFAULT_PROMPT: &str = "cmd >> ";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration with defaults applied through accessors.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values read from the config file
    pub file: ConsoleConfig,
    /// Path the config was loaded from (if any)
    path: Option<PathBuf>,
}

impl From<ConsoleConfig> for Config {
    fn from(file: ConsoleConfig) -> Self {
        Self { file, path: None }
    }
}

impl Config {
    /// Load configuration from `explicit` or the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated, or if `explicit` does not exist. Missing default
    /// config files are not an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::locate() {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load and validate a specific config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: ConsoleConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        file.validate()?;

        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file in the default locations.
    fn locate() -> Option<PathBuf> {
        let candidates = [
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            std::env::var_os("XDG_CONFIG_HOME")
                .map(|xdg| PathBuf::from(xdg).join("phonedeck/config.toml")),
            dirs::home_dir().map(|home| home.join(".phonedeck/config.toml")),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Base URL of the device service, always ending in `/`.
    pub fn server_url(&self) -> String {
        let url = self
            .file
            .server_url
            .as_deref()
            .unwrap_or(DEFAULT_SERVER_URL);
        if url.ends_with('/') {
            url.to_string()
        } else {
            format!("{}/", url)
        }
    }

    /// Path of the YAML help file.
    pub fn help_file(&self) -> PathBuf {
        PathBuf::from(self.file.help_file.as_deref().unwrap_or(DEFAULT_HELP_FILE))
    }

    /// Interactive prompt.
    pub fn prompt(&self) -> &str {
        self.file.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    /// Whether to ask for the device password at startup.
    ///
    /// Defaults to `true`.
    pub fn password_gate(&self) -> bool {
        self.file.password_gate.unwrap_or(true)
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.file
                .request_timeout_secs
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
