//! Output formatting module

use anyhow::Result;
use iaa_core::Report;
use serde::{Deserialize, Serialize};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format one comparison report; `script` holds readable edit steps
    fn format_report(&mut self, report: &Report, script: &[String]) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One labelled score per line
    #[default]
    Text,
    /// The full report as JSON
    Json,
    /// Markdown table
    Markdown,
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
