use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Settings of the command interpreter, optionally loaded from a TOML file.
///
/// Every field has a default, so an empty file is a valid settings file:
///
/// ```toml
/// prompt = "> "
/// strict_sizes = true
/// history = false
/// log_filter = "parking_commands=info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Prompt shown by the interactive loop.
    pub prompt: String,
    /// Reject `create_parking_lot` when a count is not a non-negative integer.
    /// When false the count is logged as malformed and treated as zero.
    pub strict_sizes: bool,
    /// Keep a line-editing history in the interactive loop.
    pub history: bool,
    /// `tracing` filter directives, used when `RUST_LOG` is not set.
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: "Enter command: ".to_string(),
            strict_sizes: false,
            history: true,
            log_filter: None,
        }
    }
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
