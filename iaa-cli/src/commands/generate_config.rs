//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the markers and default metrics");
        println!("2. Check your annotations with it:");
        println!(
            "   iaa validate --config {} --file text1.txt text2.txt",
            self.output.display()
        );
        println!("3. Use it for comparisons:");
        println!(
            "   iaa compare --config {} --file text1.txt text2.txt",
            self.output.display()
        );

        Ok(())
    }
}

const TEMPLATE: &str = r#"# Configuration for iaa
# Command-line flags override every value in this file.

# Literals that open and close a markable. They must not be empty
# and must not contain whitespace.
[markers]
opening = "["
closing = "]"

[input]
# utf-8, utf-8-sig, utf-16, utf-16le, utf-16be or latin-1
encoding = "utf-8"

[output]
# text, json or markdown
format = "text"
pretty_json = true
# Print the structural edit script alongside the Levenshtein distance
show_script = false

# Metrics computed when no metric flag is given
[metrics]
naive = true
ngram = true
levenshtein = true
# Allow Demerge and Substitute in the edit distance
extended = false
"#;
