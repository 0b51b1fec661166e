//! Inter-annotator agreement for bracket-annotated markables
//!
//! Two annotators mark spans of interest ("markables", e.g. coreference
//! mentions) in the same text with bracket markers. This crate reads both
//! versions and reports how similarly they were marked.
//!
//! # Architecture
//!
//! - **Domain layer**: tokens, markables, the marker tokenizer and the
//!   alignment check
//! - **Metrics layer**: naive agreement, NGram agreement ("ngreement") and
//!   the structural edit distance, each a pure function of two aligned
//!   annotations
//! - **API layer**: [`Comparison`], which tokenizes and validates once and
//!   assembles a serializable [`Report`]
//!
//! # Example
//!
//! ```rust
//! use iaa_core::{naive, ngram, structural_distance, tokenize, validate};
//!
//! let a = tokenize("[Sie] verließ [den großen Raum]", "[", "]").unwrap();
//! let b = tokenize("Sie verließ [den] [großen] [Raum]", "[", "]").unwrap();
//! validate(&a, &b).unwrap();
//!
//! assert_eq!(naive(&a, &b).unwrap(), 4.0 / 5.0);
//! assert!(ngram(&a, &b) < 1.0);
//! assert_eq!(structural_distance(&a, &b).0, 5);
//! ```

pub mod api;
pub mod domain;
pub mod error;
pub mod metrics;

pub use api::{Comparison, Config, ConfigBuilder, MetricSet, NGramReport, NaiveReport, Report};
pub use domain::{tokenize, tokenize_with, validate, Annotation, Markable, Markers, Token};
pub use error::{Error, MalformedKind, MarkableProblem, Mismatch, Result};
pub use metrics::{
    naive, ngram, structural_distance, AgreementCounts, EditMode, EditOp, NGramBreakdown,
    StructuralDistance,
};
