//! help
//!
//! The operator help file.
//!
//! # Format
//!
//! A flat YAML mapping from command phrase to description:
//!
//! ```yaml
//! show contacts: List unique contacts
//! show sms: List text messages
//! exit: Leave the console
//! ```
//!
//! Entries are printed in file order as `<command>  ---  <description>`.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;

/// Separator between a command and its description.
pub const SEPARATOR: &str = "  ---  ";

/// Errors from loading the help file.
#[derive(Debug, Error)]
pub enum HelpError {
    #[error("failed to read help file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse help file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("help file '{path}' must be a mapping of command to description")]
    NotAMapping { path: PathBuf },

    #[error("help entry in '{path}' must map text to text: {entry}")]
    InvalidEntry { path: PathBuf, entry: String },
}

/// One help line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub command: String,
    pub description: String,
}

impl HelpEntry {
    /// Render as a single output line.
    pub fn line(&self) -> String {
        format!("{}{}{}", self.command, SEPARATOR, self.description)
    }
}

/// Load help entries from a YAML file, preserving file order.
pub fn load(path: &Path) -> Result<Vec<HelpEntry>, HelpError> {
    let contents = fs::read_to_string(path).map_err(|e| HelpError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse(path, &contents)
}

/// Parse help entries from YAML text. `path` is only used in errors.
pub fn parse(path: &Path, contents: &str) -> Result<Vec<HelpEntry>, HelpError> {
    let value: Value = serde_yaml::from_str(contents).map_err(|e| HelpError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        // An empty document has nothing to show.
        Value::Null => return Ok(Vec::new()),
        _ => {
            return Err(HelpError::NotAMapping {
                path: path.to_path_buf(),
            })
        }
    };

    mapping
        .into_iter()
        .map(|(key, value)| match (scalar_text(&key), scalar_text(&value)) {
            (Some(command), Some(description)) => Ok(HelpEntry {
                command,
                description,
            }),
            _ => Err(HelpError::InvalidEntry {
                path: path.to_path_buf(),
                entry: format!("{:?}: {:?}", key, value),
            }),
        })
        .collect()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}
