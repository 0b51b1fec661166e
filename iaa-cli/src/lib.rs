//! iaa CLI library
//!
//! Command-line interface for measuring inter-annotator agreement between
//! two bracket-annotated versions of the same text.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;

pub use error::{CliError, CliResult};

use clap::Parser;

/// Inter-annotator agreement for bracket-annotated markables
#[derive(Debug, Parser)]
#[command(name = "iaa", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub log: logging::LogArgs,

    #[command(subcommand)]
    pub command: commands::Commands,
}

impl Cli {
    /// Set up logging and run the selected command
    pub fn run(&self) -> CliResult<()> {
        self.log.init()?;
        log::debug!("Running {:?}", self.command);
        self.command.execute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compare() {
        let cli = Cli::try_parse_from([
            "iaa",
            "-vv",
            "compare",
            "--text",
            "[a] b",
            "a [b]",
            "--naive",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.log.verbose, 2);
        let commands::Commands::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.text.as_deref().map(<[String]>::len), Some(2));
        assert!(args.naive);
        assert_eq!(args.format, Some(output::OutputFormat::Json));
    }

    #[test]
    fn test_text_and_file_conflict() {
        let result = Cli::try_parse_from([
            "iaa", "compare", "--text", "a", "b", "--file", "x.txt", "y.txt", "--naive",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_text_needs_two_values() {
        let result = Cli::try_parse_from(["iaa", "compare", "--text", "a", "--naive"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["iaa", "validate", "-f", "a.txt", "-q"]).unwrap();
        assert!(cli.log.quiet);
    }
}
