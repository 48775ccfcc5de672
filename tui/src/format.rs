//! Reading and writing configuration files.

use lifeterm_lib::Config;
use std::{fs, path::Path};

/// Supported configuration file formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    Toml,
    Yaml,
    Json,
}

impl Format {
    /// Names accepted on the command line.
    pub(crate) const NAMES: [&'static str; 4] = ["toml", "yaml", "yml", "json"];

    /// Finds the format from a name or a file extension, ignoring case.
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "toml" => Some(Format::Toml),
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// Finds the format from the extension of a file.
    pub(crate) fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_name)
    }

    pub(crate) fn parse(self, text: &str) -> Result<Config, String> {
        match self {
            Format::Toml => toml::from_str(text).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
            Format::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        }
    }

    pub(crate) fn serialize(self, config: &Config) -> Result<String, String> {
        match self {
            Format::Toml => toml::to_string(config).map_err(|e| e.to_string()),
            Format::Yaml => serde_yaml::to_string(config).map_err(|e| e.to_string()),
            Format::Json => serde_json::to_string_pretty(config).map_err(|e| e.to_string()),
        }
    }
}

/// Reads a configuration file, choosing the format by its extension.
pub(crate) fn load(path: &Path) -> Result<Config, String> {
    let format = Format::from_path(path).ok_or_else(|| {
        format!(
            "unknown format of {}, expected a .toml, .yaml, .yml or .json file",
            path.display()
        )
    })?;
    let text = fs::read_to_string(path)
        .map_err(|e| format!("unable to read {}: {}", path.display(), e))?;
    format
        .parse(&text)
        .map_err(|e| format!("invalid config file {}: {}", path.display(), e))
}
