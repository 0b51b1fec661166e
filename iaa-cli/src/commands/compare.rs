//! Compare command implementation

use super::AnnotationArgs;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{
    JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use anyhow::{Context, Result};
use clap::{ArgGroup, Args};
use iaa_core::{Comparison, EditMode, MetricSet};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the compare command
#[derive(Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["text", "file"])))]
pub struct CompareArgs {
    /// Two text annotations to be compared, of the same text
    #[arg(short, long, num_args = 2, value_names = ["TEXT", "TEXT"])]
    pub text: Option<Vec<String>>,

    /// Two files with text annotations to be compared, of the same text
    #[arg(short, long, num_args = 2, value_names = ["FILE", "FILE"])]
    pub file: Option<Vec<PathBuf>>,

    /// Naive metric: agreement on whether each token is in a markable
    #[arg(long)]
    pub naive: bool,

    /// NGram metric: how well do markable boundaries agree
    #[arg(long)]
    pub ngram: bool,

    /// Structural edit distance: changes needed until both annotations are equal
    #[arg(long)]
    pub levenshtein: bool,

    /// Allow Demerge and Substitute in the edit distance
    #[arg(long)]
    pub extended: bool,

    /// Print the structural edit script
    #[arg(long)]
    pub script: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Single-line JSON output
    #[arg(long)]
    pub compact: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub annotation: AnnotationArgs,
}

impl CompareArgs {
    /// Execute the compare command
    pub fn execute(&self) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let config = self.annotation.load_config()?;

        let metrics = self.metrics(&config.metrics);
        if metrics.is_empty() {
            return Err(CliError::MissingMetric.into());
        }

        let mode = if self.extended || config.metrics.extended {
            EditMode::Extended
        } else {
            EditMode::Standard
        };
        let core_config = self.annotation.core_config(&config, mode)?;

        let (left, right) = self.read_texts(&config)?;
        let comparison = Comparison::from_texts(&left, &right, &core_config)?;
        let report = comparison.report(metrics)?;

        log::info!(
            "Compared {} tokens ({} vs {} markables)",
            report.tokens,
            report.left_markables,
            report.right_markables
        );

        let script: Vec<String> = match &report.levenshtein {
            Some(distance) if self.script || config.output.show_script => distance
                .script
                .iter()
                .map(|op| op.describe(comparison.left(), comparison.right()))
                .collect(),
            _ => Vec::new(),
        };

        let format = self.format.unwrap_or(config.output.format);
        let pretty = config.output.pretty_json && !self.compact;

        let mut formatter = self.formatter(format, pretty)?;
        formatter.format_report(&report, &script)?;
        formatter.finish()
    }

    /// Metric flags, or the configured metrics when no flag is given
    fn metrics(&self, configured: &crate::config::MetricsConfig) -> MetricSet {
        let flags = MetricSet {
            naive: self.naive,
            ngram: self.ngram,
            levenshtein: self.levenshtein,
        };
        if flags.is_empty() {
            MetricSet {
                naive: configured.naive,
                ngram: configured.ngram,
                levenshtein: configured.levenshtein,
            }
        } else {
            flags
        }
    }

    fn read_texts(&self, config: &crate::config::CliConfig) -> Result<(String, String)> {
        if let Some(texts) = &self.text {
            let [left, right] = texts.as_slice() else {
                anyhow::bail!("--text expects exactly two texts");
            };
            return Ok((left.clone(), right.clone()));
        }

        let Some(files) = &self.file else {
            anyhow::bail!("Missing argument: --text TEXT TEXT or --file FILE FILE");
        };
        let [left, right] = files.as_slice() else {
            anyhow::bail!("--file expects exactly two files");
        };

        let encoding = self.annotation.encoding(config)?;
        log::info!(
            "Reading {} and {} as {encoding}",
            left.display(),
            right.display()
        );
        Ok((
            FileReader::read_text(left, encoding)?,
            FileReader::read_text(right, encoding)?,
        ))
    }

    fn formatter(&self, format: OutputFormat, pretty: bool) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}
