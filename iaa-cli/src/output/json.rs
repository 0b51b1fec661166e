//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use iaa_core::Report;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs the report as one JSON object
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

/// Report plus readable edit steps
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a Report,
    #[serde(skip_serializing_if = "no_steps")]
    script_text: &'a [String],
}

fn no_steps(script: &&[String]) -> bool {
    script.is_empty()
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &Report, script: &[String]) -> Result<()> {
        let data = JsonReport {
            report,
            script_text: script,
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &data)?;
        } else {
            serde_json::to_writer(&mut self.writer, &data)?;
        }
        writeln!(self.writer)?;
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
    use serde_json::Value;

    #[test]
    fn test_json_output() {
        let mut buffer = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buffer, false);
        formatter.format_report(&peter_report(), &[]).unwrap();
        formatter.finish().unwrap();

        let value: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["tokens"], 4);
        assert_eq!(value["levenshtein"]["distance"], 2);
        assert_eq!(value["levenshtein"]["script"][0]["op"], "merge");
        assert_eq!(value["levenshtein"]["script"][1]["op"], "delete");
        assert_eq!(value["naive"]["counts"]["disagree"], 1);
        assert!(value.get("script_text").is_none());
    }

    #[test]
    fn test_pretty_json_with_script() {
        let mut buffer = Vec::new();
        let mut formatter = JsonFormatter::new(&mut buffer, true);
        formatter
            .format_report(&peter_report(), &["delete [seinen Mund]".to_string()])
            .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.contains("\n  \"tokens\": 4"));
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["script_text"][0], "delete [seinen Mund]");
    }
}
