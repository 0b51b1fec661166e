//! Error types for annotation parsing and comparison
//!
//! Every error here is deterministic: the same inputs always fail the same
//! way, so nothing is retryable.

use thiserror::Error;

/// What went wrong while reading bracket markers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// Closing marker with no open markable
    UnmatchedClosing,
    /// Opening marker while a markable is already open
    NestedOpening,
    /// Text ended inside a markable
    Unclosed,
    /// Markable without any token between its markers
    EmptyMarkable,
    /// Two markables touching the same token
    SharedToken,
}

impl std::fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedKind::UnmatchedClosing => write!(f, "closing marker without opening marker"),
            MalformedKind::NestedOpening => write!(f, "nested opening marker"),
            MalformedKind::Unclosed => write!(f, "unclosed markable at end of text"),
            MalformedKind::EmptyMarkable => write!(f, "markable contains no token"),
            MalformedKind::SharedToken => write!(f, "two markables share a token"),
        }
    }
}

/// How two token sequences disagree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Different number of tokens
    Length {
        /// Token count of the left annotation
        left: usize,
        /// Token count of the right annotation
        right: usize,
    },
    /// Same number of tokens, different text at `index`
    Token {
        /// First differing token index
        index: usize,
        /// Token text in the left annotation
        left: String,
        /// Token text in the right annotation
        right: String,
    },
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mismatch::Length { left, right } => {
                write!(f, "token counts differ ({left} vs {right})")
            }
            Mismatch::Token { index, left, right } => {
                write!(f, "token {index} differs ('{left}' vs '{right}')")
            }
        }
    }
}

/// Why a markable cannot be part of an annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkableProblem {
    /// `start` lies after `end`
    Reversed,
    /// `end` lies past the last token
    OutOfRange,
    /// Shares a token with the preceding markable
    Overlapping,
}

impl std::fmt::Display for MarkableProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarkableProblem::Reversed => write!(f, "start after end"),
            MarkableProblem::OutOfRange => write!(f, "past the last token"),
            MarkableProblem::Overlapping => write!(f, "overlaps the previous markable"),
        }
    }
}

/// Error type for all core operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Unmatched or nested bracket markers
    #[error("malformed annotation at byte {offset}: {kind}")]
    MalformedAnnotation {
        /// Kind of marker error
        kind: MalformedKind,
        /// Byte offset of the offending marker; for `Unclosed`, the unclosed opening marker
        offset: usize,
    },

    /// The two annotations do not annotate the same text
    #[error("annotations do not share the same text: {0}")]
    TextMismatch(Mismatch),

    /// Markable that cannot be placed over the token sequence
    #[error("invalid markable {start}..={end}: {problem}")]
    InvalidMarkable {
        /// First token index as given
        start: usize,
        /// Last token index as given
        end: usize,
        /// What is wrong with it
        problem: MarkableProblem,
    },

    /// Metric needs at least one token
    #[error("annotation contains no tokens")]
    EmptyInput,

    /// Marker configuration cannot be used for tokenizing
    #[error("invalid markers: {0}")]
    InvalidMarkers(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
