//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use iaa_core::Report;
use std::io::Write;

/// Markdown formatter - outputs scores as a table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, report: &Report, script: &[String]) -> Result<()> {
        writeln!(self.writer, "| Metric | Score |")?;
        writeln!(self.writer, "| --- | --- |")?;
        if let Some(naive) = &report.naive {
            writeln!(self.writer, "| Naive Accuracy | {:.4} |", naive.accuracy)?;
        }
        if let Some(ngram) = &report.ngram {
            writeln!(self.writer, "| NGram Accuracy | {:.4} |", ngram.accuracy)?;
        }
        if let Some(distance) = &report.levenshtein {
            writeln!(self.writer, "| Levenshtein Distance | {} |", distance.distance)?;
            writeln!(
                self.writer,
                "| Normalized Levenshtein | {:.4} |",
                distance.normalized
            )?;
        }

        if !script.is_empty() {
            writeln!(self.writer)?;
            writeln!(self.writer, "**Edit script**")?;
            writeln!(self.writer)?;
            for (i, step) in script.iter().enumerate() {
                writeln!(self.writer, "{}. {}", i + 1, step)?;
            }
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Tokens: {}, markables: {} / {}*",
            report.tokens, report.left_markables, report.right_markables
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
