//! High-level comparison API
//!
//! Wraps tokenizing, alignment and the metrics behind one entry point for
//! the command line and other callers.

mod comparison;
mod config;

pub use comparison::{Comparison, MetricSet, NGramReport, NaiveReport, Report};
pub use config::{Config, ConfigBuilder};
