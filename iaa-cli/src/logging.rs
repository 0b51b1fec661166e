//! Logging setup shared by all commands

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::path::PathBuf;

/// Global logging flags
#[derive(Debug, Args, Default)]
pub struct LogArgs {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write log records to this file instead of stderr
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

impl LogArgs {
    /// Default filter for the selected verbosity; `RUST_LOG` still wins
    pub fn level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Initialize env_logger from the flags
    pub fn init(&self) -> Result<()> {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(self.level()));

        if let Some(path) = &self.log_file {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }

        builder.try_init().context("Failed to initialize logging")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        let level = |verbose, quiet| {
            LogArgs {
                verbose,
                quiet,
                log_file: None,
            }
            .level()
        };
        assert_eq!(level(0, false), "warn");
        assert_eq!(level(1, false), "info");
        assert_eq!(level(2, false), "debug");
        assert_eq!(level(7, false), "trace");
        assert_eq!(level(0, true), "error");
    }

    #[test]
    fn test_unwritable_log_file() {
        let args = LogArgs {
            log_file: Some(PathBuf::from("/nonexistent/dir/iaa.log")),
            ..LogArgs::default()
        };
        let err = args.init().unwrap_err();
        assert!(err.to_string().contains("Failed to create log file"));
    }
}
