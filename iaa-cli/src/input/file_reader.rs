//! File reading utilities

use super::Encoding;
use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads annotation files in a configured encoding
pub struct FileReader;

impl FileReader {
    /// Read a file and decode it as text
    pub fn read_text(path: &Path, encoding: Encoding) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => anyhow::Error::new(CliError::FileNotFound(
                path.display().to_string(),
            )),
            _ => anyhow::Error::new(e)
                .context(format!("Failed to read file: {}", path.display())),
        })?;

        log::debug!("read {} bytes from {}", bytes.len(), path.display());

        let text = encoding
            .decode(&bytes)
            .with_context(|| format!("Failed to decode {} as {encoding}", path.display()))?;

        Ok(text)
    }
}
