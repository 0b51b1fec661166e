//! Configuration for comparisons

use crate::domain::Markers;
use crate::error::{Error, Result};
use crate::metrics::EditMode;

/// Comparison configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) markers: Markers,
    pub(crate) edit_mode: EditMode,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Marker literals used for both annotations
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Operations allowed in the structural edit script
    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    opening: Option<String>,
    closing: Option<String>,
    edit_mode: Option<EditMode>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening marker literal
    pub fn opening(mut self, literal: impl Into<String>) -> Self {
        self.opening = Some(literal.into());
        self
    }

    /// Set the closing marker literal
    pub fn closing(mut self, literal: impl Into<String>) -> Self {
        self.closing = Some(literal.into());
        self
    }

    /// Set the structural edit mode
    pub fn edit_mode(mut self, mode: EditMode) -> Self {
        self.edit_mode = Some(mode);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let defaults = Markers::default();
        let markers = Markers::new(
            self.opening.unwrap_or_else(|| defaults.opening().to_string()),
            self.closing.unwrap_or_else(|| defaults.closing().to_string()),
        )
        .map_err(|e| match e {
            Error::InvalidMarkers(msg) => Error::InvalidMarkers(format!("configuration: {msg}")),
            other => other,
        })?;

        Ok(Config {
            markers,
            edit_mode: self.edit_mode.unwrap_or_default(),
        })
    }
}
