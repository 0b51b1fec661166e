//! Opening and closing bracket literals

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default marker literals
pub mod defaults {
    /// Default opening marker
    pub const OPENING: &str = "[";

    /// Default closing marker
    pub const CLOSING: &str = "]";
}

/// The pair of literals delimiting a markable.
///
/// Markers may be longer than one character. When both literals are the
/// same string, each occurrence toggles between opening and closing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MarkersData")]
pub struct Markers {
    opening: String,
    closing: String,
}

#[derive(Deserialize)]
struct MarkersData {
    opening: String,
    closing: String,
}

impl TryFrom<MarkersData> for Markers {
    type Error = Error;

    fn try_from(data: MarkersData) -> Result<Self> {
        Markers::new(data.opening, data.closing)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            opening: defaults::OPENING.to_string(),
            closing: defaults::CLOSING.to_string(),
        }
    }
}

impl Markers {
    /// Create markers from two literals.
    ///
    /// Literals must be non-empty and must not contain whitespace, since
    /// whitespace is the token delimiter.
    pub fn new(opening: impl Into<String>, closing: impl Into<String>) -> Result<Self> {
        let markers = Self {
            opening: opening.into(),
            closing: closing.into(),
        };
        markers.validate()?;
        Ok(markers)
    }

    /// Opening literal
    pub fn opening(&self) -> &str {
        &self.opening
    }

    /// Closing literal
    pub fn closing(&self) -> &str {
        &self.closing
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for (name, literal) in [("opening", &self.opening), ("closing", &self.closing)] {
            if literal.is_empty() {
                return Err(Error::InvalidMarkers(format!("{name} marker is empty")));
            }
            if literal.chars().any(char::is_whitespace) {
                return Err(Error::InvalidMarkers(format!(
                    "{name} marker '{literal}' contains whitespace"
                )));
            }
        }
        Ok(())
    }
}
