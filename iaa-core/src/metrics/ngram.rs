//! NGram agreement ("ngreement").
//!
//! A markable of the other annotation earns its squared length when it
//! lies inside a markable of the reference annotation, so agreeing on
//! long spans counts for more than agreeing on short ones. The final
//! score averages both reference directions over the markables and over
//! their complements (the maximal uncovered runs).

use crate::domain::{Annotation, Markable};
use serde::{Deserialize, Serialize};

/// The four directional ratios behind an ngreement score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NGramBreakdown {
    /// `a` as reference, markables of `b` scored
    pub forward: f64,
    /// `b` as reference, markables of `a` scored
    pub backward: f64,
    /// Same as `forward` on the complement annotations
    pub complement_forward: f64,
    /// Same as `backward` on the complement annotations
    pub complement_backward: f64,
}

impl NGramBreakdown {
    /// Compute all four ratios for two aligned annotations
    pub fn compute(a: &Annotation, b: &Annotation) -> Self {
        let a_gaps = a.complement();
        let b_gaps = b.complement();

        Self {
            forward: directional_ratio(a.markables(), b.markables()),
            backward: directional_ratio(b.markables(), a.markables()),
            complement_forward: directional_ratio(a_gaps.markables(), b_gaps.markables()),
            complement_backward: directional_ratio(b_gaps.markables(), a_gaps.markables()),
        }
    }

    /// Arithmetic mean of the four ratios.
    ///
    /// Summed pairwise so that swapping the annotations gives a bit-identical result.
    pub fn mean(&self) -> f64 {
        ((self.forward + self.backward) + (self.complement_forward + self.complement_backward))
            / 4.0
    }
}

/// Ngreement of two aligned annotations, in `[0, 1]`
pub fn ngram(a: &Annotation, b: &Annotation) -> f64 {
    NGramBreakdown::compute(a, b).mean()
}

/// Sum of squared markable lengths
pub fn max_score(reference: &[Markable]) -> u64 {
    reference.iter().map(Markable::weight).sum()
}

/// Squared lengths of markables in `other` that lie inside some markable of `reference`
pub fn score(reference: &[Markable], other: &[Markable]) -> u64 {
    other
        .iter()
        .filter(|m| enclosed(reference, m))
        .map(Markable::weight)
        .sum()
}

/// `score / max_score`; an empty reference scores 1 only against an empty other
pub fn directional_ratio(reference: &[Markable], other: &[Markable]) -> f64 {
    match max_score(reference) {
        0 if other.is_empty() => 1.0,
        0 => 0.0,
        max => score(reference, other) as f64 / max as f64,
    }
}

/// Markables are sorted and disjoint, so only the last one starting at or
/// before `m` can contain it.
fn enclosed(reference: &[Markable], m: &Markable) -> bool {
    let candidates = reference.partition_point(|r| r.start <= m.start);
    candidates > 0 && reference[candidates - 1].contains(m)
}
