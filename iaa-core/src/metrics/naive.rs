//! Naive per-token agreement.
//!
//! Each token is either covered by some markable or not. The score is the
//! share of tokens on whose status both annotators agree.

use crate::domain::Annotation;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Three-way token count behind the naive score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgreementCounts {
    /// Tokens covered in both annotations
    pub both_covered: usize,
    /// Tokens uncovered in both annotations
    pub both_uncovered: usize,
    /// Tokens covered in exactly one annotation
    pub disagree: usize,
}

impl AgreementCounts {
    /// Count coverage agreement of two aligned annotations
    pub fn count(a: &Annotation, b: &Annotation) -> Self {
        a.coverage()
            .into_iter()
            .zip(b.coverage())
            .fold(Self::default(), |mut counts, pair| {
                match pair {
                    (true, true) => counts.both_covered += 1,
                    (false, false) => counts.both_uncovered += 1,
                    _ => counts.disagree += 1,
                }
                counts
            })
    }

    /// Number of tokens counted
    pub fn total(&self) -> usize {
        self.both_covered + self.both_uncovered + self.disagree
    }

    /// Tokens with matching status
    pub fn agree(&self) -> usize {
        self.both_covered + self.both_uncovered
    }

    /// Agreement ratio, or `EmptyInput` when nothing was counted
    pub fn ratio(&self) -> Result<f64> {
        match self.total() {
            0 => Err(Error::EmptyInput),
            total => Ok(self.agree() as f64 / total as f64),
        }
    }
}

/// Share of tokens whose covered/uncovered status agrees, in `[0, 1]`
pub fn naive(a: &Annotation, b: &Annotation) -> Result<f64> {
    AgreementCounts::count(a, b).ratio()
}
