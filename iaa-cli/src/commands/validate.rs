//! Validate command implementation

use super::AnnotationArgs;
use crate::input::FileReader;
use anyhow::Result;
use clap::Args;
use iaa_core::{tokenize_with, Annotation, EditMode};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Annotated files to check; two or more are also checked for matching text
    #[arg(short, long = "file", value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub annotation: AnnotationArgs,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let config = self.annotation.load_config()?;
        let encoding = self.annotation.encoding(&config)?;
        let core_config = self.annotation.core_config(&config, EditMode::Standard)?;

        let mut parsed: Vec<(&PathBuf, Annotation)> = Vec::with_capacity(self.files.len());
        let mut failures = 0;

        for path in &self.files {
            let text = FileReader::read_text(path, encoding)?;
            match tokenize_with(&text, core_config.markers()) {
                Ok(annotation) => {
                    println!(
                        "✓ {}: {} tokens, {} markables",
                        path.display(),
                        annotation.len(),
                        annotation.markables().len()
                    );
                    parsed.push((path, annotation));
                }
                Err(e) => {
                    println!("✗ {}: {e}", path.display());
                    failures += 1;
                }
            }
        }

        if failures == 0 {
            if let Some(((first_path, first), rest)) = parsed.split_first() {
                for (path, annotation) in rest {
                    match iaa_core::validate(first, annotation) {
                        Ok(()) => log::debug!(
                            "{} matches {}",
                            path.display(),
                            first_path.display()
                        ),
                        Err(e) => {
                            println!(
                                "✗ {} does not match {}: {e}",
                                path.display(),
                                first_path.display()
                            );
                            failures += 1;
                        }
                    }
                }
                if !rest.is_empty() && failures == 0 {
                    println!("✓ All files contain the same text");
                }
            }
        }

        if failures > 0 {
            anyhow::bail!("Validation failed: {failures} problem(s) found");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(files: Vec<PathBuf>) -> ValidateArgs {
        ValidateArgs {
            files,
            annotation: AnnotationArgs::default(),
        }
    }

    #[test]
    fn test_validate_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("text1.txt");
        fs::write(&path, "[Er] geht zu [Lisa].").unwrap();

        assert!(args(vec![path]).execute().is_ok());
    }

    #[test]
    fn test_validate_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.txt");
        fs::write(&path, "[Er geht zu [Lisa].").unwrap();

        let err = args(vec![path]).execute().unwrap_err();
        assert!(err.to_string().contains("1 problem"));
    }

    #[test]
    fn test_validate_matching_pair() {
        let temp_dir = TempDir::new().unwrap();
        let left = temp_dir.path().join("a.txt");
        let right = temp_dir.path().join("b.txt");
        fs::write(&left, "als [Peter] [seinen Mund]").unwrap();
        fs::write(&right, "als [Peter seinen] Mund").unwrap();

        assert!(args(vec![left, right]).execute().is_ok());
    }

    #[test]
    fn test_validate_mismatched_pair() {
        let temp_dir = TempDir::new().unwrap();
        let left = temp_dir.path().join("a.txt");
        let right = temp_dir.path().join("b.txt");
        fs::write(&left, "[Ali] hat Hunde.").unwrap();
        fs::write(&right, "[Ali] hat Katzen.").unwrap();

        assert!(args(vec![left, right]).execute().is_err());
    }

    #[test]
    fn test_validate_custom_markers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tags.txt");
        fs::write(&path, "<m>Er</m> geht").unwrap();

        let cmd = ValidateArgs {
            files: vec![path],
            annotation: AnnotationArgs {
                opening: Some("<m>".into()),
                closing: Some("</m>".into()),
                ..AnnotationArgs::default()
            },
        };
        assert!(cmd.execute().is_ok());
    }

    #[test]
    fn test_validate_missing_file() {
        let err = args(vec![PathBuf::from("/nonexistent/a.txt")])
            .execute()
            .unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
