//! Tokens, markables and annotations.
//!
//! An [`Annotation`] is one annotator's labeling of a text: the token
//! sequence with the bracket markers stripped, plus the markables as
//! inclusive token-index intervals. Markables are kept sorted and are
//! pairwise disjoint.

use crate::error::{Error, MarkableProblem, Result};
use serde::{Deserialize, Serialize};

/// A whitespace-delimited token with its sequence position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// 0-based position in the token sequence
    pub index: usize,
    /// Surface text with markers removed
    pub text: String,
}

/// An inclusive interval `[start, end]` of token indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Markable {
    /// First covered token
    pub start: usize,
    /// Last covered token
    pub end: usize,
}

impl Markable {
    /// Create a markable; `start` must not exceed `end`
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "markable start {start} after end {end}");
        Self { start, end }
    }

    /// Number of covered tokens
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A markable always covers at least one token
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `index` lies inside this markable
    pub fn covers(&self, index: usize) -> bool {
        self.start <= index && index <= self.end
    }

    /// Whether `other` lies fully inside this markable
    pub fn contains(&self, other: &Markable) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the two markables share at least one token
    pub fn overlaps(&self, other: &Markable) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Length-squared weight used by the NGram metric
    pub(crate) fn weight(&self) -> u64 {
        let len = self.len() as u64;
        len * len
    }
}

/// Token sequence plus markable set of one annotator
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "AnnotationData")]
pub struct Annotation {
    tokens: Vec<Token>,
    markables: Vec<Markable>,
}

/// Unchecked wire form; deserializing goes through [`Annotation::new`]
#[derive(Deserialize)]
struct AnnotationData {
    tokens: Vec<Token>,
    markables: Vec<Markable>,
}

impl TryFrom<AnnotationData> for Annotation {
    type Error = Error;

    fn try_from(data: AnnotationData) -> Result<Self> {
        Annotation::new(data.tokens.into_iter().map(|t| t.text), data.markables)
    }
}

impl Annotation {
    /// Build an annotation from token texts and markables.
    ///
    /// Markables are sorted by position. Fails with
    /// [`Error::InvalidMarkable`] when a markable is reversed, reaches past
    /// the last token or overlaps another one.
    pub fn new<S: Into<String>>(
        tokens: impl IntoIterator<Item = S>,
        markables: impl IntoIterator<Item = Markable>,
    ) -> Result<Self> {
        let tokens: Vec<Token> = tokens
            .into_iter()
            .enumerate()
            .map(|(index, text)| Token {
                index,
                text: text.into(),
            })
            .collect();

        let mut markables: Vec<Markable> = markables.into_iter().collect();
        markables.sort();

        for m in &markables {
            if m.start > m.end {
                return Err(invalid(m, MarkableProblem::Reversed));
            }
            if m.end >= tokens.len() {
                return Err(invalid(m, MarkableProblem::OutOfRange));
            }
        }
        if let Some(pair) = markables.windows(2).find(|w| w[0].end >= w[1].start) {
            return Err(invalid(&pair[1], MarkableProblem::Overlapping));
        }

        Ok(Self { tokens, markables })
    }

    /// Tokenizer-side constructor; markables are already sorted and disjoint
    pub(crate) fn from_parts(tokens: Vec<Token>, markables: Vec<Markable>) -> Self {
        Self { tokens, markables }
    }

    /// Tokens in sequence order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Markables in sequence order
    pub fn markables(&self) -> &[Markable] {
        &self.markables
    }

    /// Number of tokens (N)
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True for an annotation with no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Per-token covered flags
    pub fn coverage(&self) -> Vec<bool> {
        let mut covered = vec![false; self.tokens.len()];
        for m in &self.markables {
            covered[m.start..=m.end].fill(true);
        }
        covered
    }

    /// Annotation whose markables are the maximal uncovered runs of this one
    pub fn complement(&self) -> Annotation {
        let mut gaps = Vec::new();
        let mut next = 0;
        for m in &self.markables {
            if m.start > next {
                gaps.push(Markable::new(next, m.start - 1));
            }
            next = m.end + 1;
        }
        if next < self.tokens.len() {
            gaps.push(Markable::new(next, self.tokens.len() - 1));
        }

        Annotation {
            tokens: self.tokens.clone(),
            markables: gaps,
        }
    }

    /// Surface text of a markable, tokens joined by single spaces
    pub fn markable_text(&self, markable: &Markable) -> String {
        self.tokens[markable.start..=markable.end]
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Surface text of every markable, in order
    pub fn markable_texts(&self) -> Vec<String> {
        self.markables
            .iter()
            .map(|m| self.markable_text(m))
            .collect()
    }

    /// The bracket-stripped text, tokens joined by single spaces
    pub fn plain_text(&self) -> String {
        self.tokens
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn invalid(m: &Markable, problem: MarkableProblem) -> Error {
    Error::InvalidMarkable {
        start: m.start,
        end: m.end,
        problem,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("w{i}")).collect()
    }

    #[test]
    fn test_markable_geometry() {
        let m = Markable::new(3, 5);
        assert_eq!(m.len(), 3);
        assert!(m.covers(3) && m.covers(5));
        assert!(!m.covers(6));
        assert!(m.contains(&Markable::new(4, 4)));
        assert!(!m.contains(&Markable::new(4, 6)));
        assert!(m.overlaps(&Markable::new(5, 7)));
        assert!(!m.overlaps(&Markable::new(6, 7)));
        assert_eq!(m.weight(), 9);
    }

    #[test]
    fn test_new_sorts_and_checks() {
        let ann = Annotation::new(words(5), [Markable::new(3, 4), Markable::new(0, 1)]).unwrap();
        assert_eq!(ann.markables(), &[Markable::new(0, 1), Markable::new(3, 4)]);

        assert_eq!(
            Annotation::new(words(3), [Markable::new(2, 3)]).unwrap_err(),
            Error::InvalidMarkable {
                start: 2,
                end: 3,
                problem: MarkableProblem::OutOfRange
            }
        );
        assert_eq!(
            Annotation::new(words(5), [Markable::new(2, 3), Markable::new(0, 2)]).unwrap_err(),
            Error::InvalidMarkable {
                start: 2,
                end: 3,
                problem: MarkableProblem::Overlapping
            }
        );
        assert!(matches!(
            Annotation::new(words(5), [Markable { start: 3, end: 1 }]),
            Err(Error::InvalidMarkable {
                problem: MarkableProblem::Reversed,
                ..
            })
        ));
    }

    #[test]
    fn test_deserialize_checks_markables() {
        let json = r#"{"tokens":[{"index":0,"text":"a"}],"markables":[{"start":0,"end":5}]}"#;
        let err = serde_json::from_str::<Annotation>(json).unwrap_err();
        assert!(err.to_string().contains("past the last token"));

        // Token indices are renumbered from their order
        let json = r#"{"tokens":[{"index":7,"text":"a"},{"index":7,"text":"b"}],"markables":[{"start":1,"end":1}]}"#;
        let ann: Annotation = serde_json::from_str(json).unwrap();
        assert_eq!(ann.tokens()[1].index, 1);
        assert_eq!(ann.markable_texts(), vec!["b"]);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let ann = Annotation::new(words(4), [Markable::new(1, 2)]).unwrap();
        let json = serde_json::to_string(&ann).unwrap();
        assert_eq!(serde_json::from_str::<Annotation>(&json).unwrap(), ann);
    }

    #[test]
    fn test_coverage() {
        let ann = Annotation::new(words(5), [Markable::new(1, 2), Markable::new(4, 4)]).unwrap();
        assert_eq!(ann.coverage(), vec![false, true, true, false, true]);
    }

    #[test]
    fn test_complement() {
        let ann = Annotation::new(words(6), [Markable::new(1, 2), Markable::new(3, 3)]).unwrap();
        let comp = ann.complement();
        assert_eq!(comp.markables(), &[Markable::new(0, 0), Markable::new(4, 5)]);
        assert_eq!(comp.len(), 6);

        let none = Annotation::new(words(3), []).unwrap();
        assert_eq!(none.complement().markables(), &[Markable::new(0, 2)]);

        let full = Annotation::new(words(3), [Markable::new(0, 2)]).unwrap();
        assert!(full.complement().markables().is_empty());

        assert!(Annotation::default().complement().markables().is_empty());
    }

    #[test]
    fn test_markable_texts() {
        let ann = Annotation::new(
            ["den", "großen", "Raum", "als", "Peter"],
            [Markable::new(0, 2), Markable::new(4, 4)],
        )
        .unwrap();
        assert_eq!(ann.markable_texts(), vec!["den großen Raum", "Peter"]);
        assert_eq!(ann.plain_text(), "den großen Raum als Peter");
    }
}
