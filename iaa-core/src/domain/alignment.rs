//! Alignment check between two annotations of the same text

use crate::domain::annotation::Annotation;
use crate::error::{Error, Mismatch, Result};

/// Fail with [`Error::TextMismatch`] unless both annotations carry the same
/// token sequence.
///
/// Every metric assumes this has passed and does not re-check it.
pub fn validate(a: &Annotation, b: &Annotation) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::TextMismatch(Mismatch::Length {
            left: a.len(),
            right: b.len(),
        }));
    }

    let first_difference = a
        .tokens()
        .iter()
        .zip(b.tokens())
        .find(|(left, right)| left.text != right.text);

    match first_difference {
        Some((left, right)) => Err(Error::TextMismatch(Mismatch::Token {
            index: left.index,
            left: left.text.clone(),
            right: right.text.clone(),
        })),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tokenizer::tokenize;

    #[test]
    fn test_same_text_different_markables() {
        let a = tokenize("[Ali] hat [Hunde].", "[", "]").unwrap();
        let b = tokenize("Ali [hat Hunde.]", "[", "]").unwrap();
        assert!(validate(&a, &b).is_ok());
    }

    #[test]
    fn test_length_mismatch() {
        let a = tokenize("[Ali] hat Hunde.", "[", "]").unwrap();
        let b = tokenize("[Ali] hat zwei Hunde.", "[", "]").unwrap();
        assert_eq!(
            validate(&a, &b),
            Err(Error::TextMismatch(Mismatch::Length { left: 3, right: 4 }))
        );
    }

    #[test]
    fn test_token_mismatch() {
        let a = tokenize("[Ali] hat Hunde.", "[", "]").unwrap();
        let b = tokenize("[Ali] hat Katzen.", "[", "]").unwrap();
        assert_eq!(
            validate(&a, &b),
            Err(Error::TextMismatch(Mismatch::Token {
                index: 2,
                left: "Hunde.".into(),
                right: "Katzen.".into(),
            }))
        );
    }

    #[test]
    fn test_punctuation_is_part_of_token() {
        let a = tokenize("[Lisa]. geht", "[", "]").unwrap();
        let b = tokenize("[Lisa] . geht", "[", "]").unwrap();
        assert!(validate(&a, &b).is_err());
    }

    #[test]
    fn test_empty_annotations_align() {
        let a = tokenize("", "[", "]").unwrap();
        let b = tokenize("   ", "[", "]").unwrap();
        assert!(validate(&a, &b).is_ok());
    }
}
