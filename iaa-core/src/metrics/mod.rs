//! Agreement metrics over two aligned annotations.
//!
//! All three metrics assume [`crate::domain::validate`] has passed.

pub mod naive;
pub mod ngram;
pub mod structural;

pub use naive::{naive, AgreementCounts};
pub use ngram::{ngram, NGramBreakdown};
pub use structural::{structural_distance, EditMode, EditOp, StructuralDistance};
