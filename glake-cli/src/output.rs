//! Output formats
//!
//! `tag` is a compact human readable listing, one item per line. `json` and `yaml` serialize
//! the value types directly.

use serde::Serialize;

use crate::error::CliError;

pub const AVAILABLE_FORMATS: &[&str] = &["tag", "json", "yaml"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Tag,
    Json,
    Yaml,
}

impl Format {
    /// Parse a name from [`AVAILABLE_FORMATS`]; clap has already rejected anything else.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => Format::Json,
            "yaml" => Format::Yaml,
            _ => Format::Tag,
        }
    }

    /// Render `value`, using `tag` for the tag format.
    pub fn render<T, F>(self, value: &T, tag: F) -> Result<String, CliError>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&T) -> String,
    {
        match self {
            Format::Tag => Ok(tag(value)),
            Format::Json => Ok(serde_json::to_string_pretty(value)? + "\n"),
            Format::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}
