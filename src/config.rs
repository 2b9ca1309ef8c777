//! Translator configuration
//!
//! Loaded from a JSON file. Every field has a default; an empty object `{}`
//! yields the stock behaviour.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::observability::{log_event_with_fields, Event, Severity};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for this schema
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value outside its allowed set
    #[error("Invalid config value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Translator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Field every document carries; `MatchAll` becomes `Exists` on it
    #[serde(default = "default_match_all_field")]
    pub match_all_field: String,

    /// Separator splitting phrase term fields into nested document paths
    #[serde(default = "default_path_separator")]
    pub path_separator: String,

    /// Minimum logged severity
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_match_all_field() -> String {
    "_id".to_string()
}

fn default_path_separator() -> String {
    ".".to_string()
}

fn default_log_level() -> String {
    "WARN".to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            match_all_field: default_match_all_field(),
            path_separator: default_path_separator(),
            log_level: default_log_level(),
        }
    }
}

impl TranslatorConfig {
    /// Load and validate configuration from a JSON file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_json(&content)?;

        let path_str = path.display().to_string();
        log_event_with_fields(
            Event::ConfigLoaded,
            &[
                ("path", path_str.as_str()),
                ("match_all_field", config.match_all_field.as_str()),
                ("log_level", config.log_level.as_str()),
            ],
        );

        Ok(config)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: TranslatorConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its allowed values
    pub fn validate(&self) -> ConfigResult<()> {
        if self.match_all_field.is_empty() {
            return Err(ConfigError::Invalid {
                field: "match_all_field",
                reason: "must not be empty".into(),
            });
        }

        if self.path_separator.chars().count() != 1 {
            return Err(ConfigError::Invalid {
                field: "path_separator",
                reason: format!(
                    "must be exactly one character, got '{}'",
                    self.path_separator
                ),
            });
        }

        self.severity()?;

        Ok(())
    }

    /// Separator as a char
    pub fn separator(&self) -> char {
        self.path_separator.chars().next().unwrap_or('.')
    }

    /// Parsed log level
    pub fn severity(&self) -> ConfigResult<Severity> {
        self.log_level
            .parse::<Severity>()
            .map_err(|reason| ConfigError::Invalid {
                field: "log_level",
                reason,
            })
    }
}
