//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::Encoding;
use anyhow::Result;
use clap::{Args, Subcommand};
use iaa_core::EditMode;
use std::path::PathBuf;

pub mod compare;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compare two annotations of the same text
    Compare(compare::CompareArgs),

    /// Check annotated files for malformed markers and matching text
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Compare(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Options shared by every command that reads annotations
#[derive(Debug, Args, Default)]
pub struct AnnotationArgs {
    /// Opening bracket used for annotation [default: "["]
    #[arg(long, value_name = "BRACKET")]
    pub opening: Option<String>,

    /// Closing bracket used for annotation [default: "]"]
    #[arg(long, value_name = "BRACKET")]
    pub closing: Option<String>,

    /// Encoding for annotation files [default: utf-8]
    #[arg(long, value_name = "ENC")]
    pub encoding: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl AnnotationArgs {
    /// Load the configuration file, or defaults without one
    pub fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                CliConfig::load(path)
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// Encoding from the flag, falling back to the configuration
    pub fn encoding(&self, config: &CliConfig) -> Result<Encoding> {
        let name = self.encoding.as_deref().unwrap_or(&config.input.encoding);
        Ok(name.parse::<Encoding>()?)
    }

    /// Core comparison settings from flags and configuration
    pub fn core_config(&self, config: &CliConfig, mode: EditMode) -> Result<iaa_core::Config> {
        let opening = self.opening.as_ref().unwrap_or(&config.markers.opening);
        let closing = self.closing.as_ref().unwrap_or(&config.markers.closing);

        iaa_core::Config::builder()
            .opening(opening.as_str())
            .closing(closing.as_str())
            .edit_mode(mode)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
