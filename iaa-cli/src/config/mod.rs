//! Configuration module
//!
//! Values come from, in increasing priority: built-in defaults, a TOML file
//! passed with `--config`, and command-line flags.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Bracket markers
    #[serde(default)]
    pub markers: MarkerConfig,

    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Metrics run when no metric flag is given
    #[serde(default)]
    pub metrics: MetricsConfig,
}

/// Marker literals
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct MarkerConfig {
    /// Opening marker
    pub opening: String,

    /// Closing marker
    pub closing: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            opening: iaa_core::domain::markers::defaults::OPENING.to_string(),
            closing: iaa_core::domain::markers::defaults::CLOSING.to_string(),
        }
    }
}

/// Input-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Encoding of annotation files
    pub encoding: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Print the structural edit script
    pub show_script: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
            show_script: false,
        }
    }
}

/// Metric selection
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MetricsConfig {
    /// Naive per-token agreement
    pub naive: bool,

    /// NGram agreement
    pub ngram: bool,

    /// Structural edit distance
    pub levenshtein: bool,

    /// Allow Demerge and Substitute in the edit distance
    pub extended: bool,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.message().to_string()))
    }
}
