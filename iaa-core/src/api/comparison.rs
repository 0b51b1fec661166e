//! Comparison of two annotated versions of one text

use crate::api::Config;
use crate::domain::{tokenize_with, validate, Annotation};
use crate::error::Result;
use crate::metrics::{AgreementCounts, NGramBreakdown, StructuralDistance};
use serde::{Deserialize, Serialize};

/// Which metrics a report should contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetricSet {
    /// Naive per-token agreement
    pub naive: bool,
    /// NGram agreement
    pub ngram: bool,
    /// Structural edit distance
    pub levenshtein: bool,
}

impl MetricSet {
    /// All three metrics
    pub fn all() -> Self {
        Self {
            naive: true,
            ngram: true,
            levenshtein: true,
        }
    }

    /// True when no metric is selected
    pub fn is_empty(&self) -> bool {
        !(self.naive || self.ngram || self.levenshtein)
    }
}

/// Naive metric section of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NaiveReport {
    /// Agreement ratio
    pub accuracy: f64,
    /// Token counts the ratio is built from
    pub counts: AgreementCounts,
}

/// NGram metric section of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NGramReport {
    /// Mean of the four directional ratios
    pub accuracy: f64,
    /// The directional ratios
    pub breakdown: NGramBreakdown,
}

/// Scores of one comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Shared token count
    pub tokens: usize,
    /// Markable count of the first annotation
    pub left_markables: usize,
    /// Markable count of the second annotation
    pub right_markables: usize,
    /// Naive agreement, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naive: Option<NaiveReport>,
    /// NGram agreement, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ngram: Option<NGramReport>,
    /// Structural edit distance, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levenshtein: Option<StructuralDistance>,
}

/// Two validated annotations of the same text.
///
/// Construction tokenizes and aligns both inputs once; every metric call
/// afterwards works on the validated pair.
///
/// ```rust
/// use iaa_core::{Comparison, Config};
///
/// let cmp = Comparison::from_texts(
///     "[Ali] hat [Hunde].",
///     "[Ali] hat Hunde.",
///     &Config::default(),
/// )
/// .unwrap();
/// assert_eq!(cmp.naive().unwrap(), 2.0 / 3.0);
/// assert_eq!(cmp.structural().distance, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Comparison {
    left: Annotation,
    right: Annotation,
    config: Config,
}

impl Comparison {
    /// Tokenize both texts with the configured markers and check alignment
    pub fn from_texts(left: &str, right: &str, config: &Config) -> Result<Self> {
        let left = tokenize_with(left, &config.markers)?;
        let right = tokenize_with(right, &config.markers)?;
        Self::from_annotations(left, right, config)
    }

    /// Check alignment of two existing annotations
    pub fn from_annotations(left: Annotation, right: Annotation, config: &Config) -> Result<Self> {
        validate(&left, &right)?;
        log::debug!(
            "aligned {} tokens, {} vs {} markables",
            left.len(),
            left.markables().len(),
            right.markables().len()
        );
        Ok(Self {
            left,
            right,
            config: config.clone(),
        })
    }

    /// First annotation
    pub fn left(&self) -> &Annotation {
        &self.left
    }

    /// Second annotation
    pub fn right(&self) -> &Annotation {
        &self.right
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Covered/uncovered token counts
    pub fn agreement_counts(&self) -> AgreementCounts {
        AgreementCounts::count(&self.left, &self.right)
    }

    /// Naive per-token agreement
    pub fn naive(&self) -> Result<f64> {
        self.agreement_counts().ratio()
    }

    /// The four directional NGram ratios
    pub fn ngram_breakdown(&self) -> NGramBreakdown {
        NGramBreakdown::compute(&self.left, &self.right)
    }

    /// NGram agreement
    pub fn ngram(&self) -> f64 {
        self.ngram_breakdown().mean()
    }

    /// Structural edit distance from the first to the second annotation
    pub fn structural(&self) -> StructuralDistance {
        StructuralDistance::compute(&self.left, &self.right, self.config.edit_mode)
    }

    /// Compute the selected metrics.
    ///
    /// Fails without a partial report if any selected metric fails.
    pub fn report(&self, metrics: MetricSet) -> Result<Report> {
        let naive = if metrics.naive {
            let counts = self.agreement_counts();
            Some(NaiveReport {
                accuracy: counts.ratio()?,
                counts,
            })
        } else {
            None
        };

        let ngram = metrics.ngram.then(|| {
            let breakdown = self.ngram_breakdown();
            NGramReport {
                accuracy: breakdown.mean(),
                breakdown,
            }
        });

        let levenshtein = metrics.levenshtein.then(|| self.structural());

        Ok(Report {
            tokens: self.left.len(),
            left_markables: self.left.markables().len(),
            right_markables: self.right.markables().len(),
            naive,
            ngram,
            levenshtein,
        })
    }
}
