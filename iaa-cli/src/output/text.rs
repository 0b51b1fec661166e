//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use iaa_core::Report;
use std::io::Write;

/// Plain text formatter - one labelled score per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &Report, script: &[String]) -> Result<()> {
        // Debug formatting keeps the trailing ".0" on whole numbers
        if let Some(naive) = &report.naive {
            writeln!(self.writer, "Naive Accuracy: {:?}", naive.accuracy)?;
        }
        if let Some(ngram) = &report.ngram {
            writeln!(self.writer, "NGram Accuracy: {:?}", ngram.accuracy)?;
        }
        if let Some(distance) = &report.levenshtein {
            writeln!(self.writer, "Levenshtein Distance: {}", distance.distance)?;
            writeln!(self.writer, "Normalized Levenshtein: {:?}", distance.normalized)?;
        }
        if !script.is_empty() {
            writeln!(self.writer, "Edit script:")?;
            for step in script {
                writeln!(self.writer, "  {step}")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::fixtures::peter_report;

    #[test]
    fn test_text_output() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        formatter.format_report(&peter_report(), &[]).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("Naive Accuracy: 0.75\n"));
        assert!(output.contains("Levenshtein Distance: 2\n"));
        assert!(output.contains("Normalized Levenshtein: 1.0\n"));
        assert!(!output.contains("Edit script"));
    }

    #[test]
    fn test_script_lines() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        formatter
            .format_report(&peter_report(), &["delete [seinen Mund]".to_string()])
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with("Edit script:\n  delete [seinen Mund]\n"));
    }
}
