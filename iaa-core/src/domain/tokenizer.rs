//! Marker tokenizer.
//!
//! Splits bracket-annotated text into whitespace-delimited tokens and
//! records every bracket pair as a [`Markable`] over token indices. The
//! markers themselves are dropped from the tokens; any other character,
//! punctuation included, stays on the token it touches:
//!
//! ```rust
//! use iaa_core::{tokenize, Markable};
//!
//! let ann = tokenize("als [Peter] [seinen Mund] öffnete.", "[", "]").unwrap();
//! assert_eq!(ann.len(), 5);
//! assert_eq!(ann.markables(), &[Markable::new(1, 1), Markable::new(2, 3)]);
//! ```

use crate::domain::annotation::{Annotation, Markable, Token};
use crate::domain::markers::Markers;
use crate::error::{Error, MalformedKind, Result};

/// Tokenize `text` with the given opening and closing marker literals
pub fn tokenize(text: &str, opening: &str, closing: &str) -> Result<Annotation> {
    let markers = Markers::new(opening, closing)?;
    tokenize_with(text, &markers)
}

/// Tokenize `text` with pre-validated markers
pub fn tokenize_with(text: &str, markers: &Markers) -> Result<Annotation> {
    Scanner::new(markers).run(text)
}

/// An open markable: marker offset and, once content arrived, its first token
#[derive(Debug, Clone, Copy)]
struct OpenMarkable {
    offset: usize,
    start: Option<usize>,
}

struct Scanner<'m> {
    opening: &'m str,
    closing: &'m str,
    tokens: Vec<Token>,
    markables: Vec<Markable>,
    current: String,
    open: Option<OpenMarkable>,
}

impl<'m> Scanner<'m> {
    fn new(markers: &'m Markers) -> Self {
        Self {
            opening: markers.opening(),
            closing: markers.closing(),
            tokens: Vec::new(),
            markables: Vec::new(),
            current: String::new(),
            open: None,
        }
    }

    fn run(mut self, text: &str) -> Result<Annotation> {
        let mut pos = 0;

        while pos < text.len() {
            let rest = &text[pos..];

            // An open markable gives the closing marker priority, which also
            // makes identical opening and closing literals toggle.
            if self.open.is_some() && rest.starts_with(self.closing) {
                self.close(pos)?;
                pos += self.closing.len();
                continue;
            }

            if rest.starts_with(self.opening) {
                self.begin(pos)?;
                pos += self.opening.len();
                continue;
            }

            if rest.starts_with(self.closing) {
                return Err(malformed(MalformedKind::UnmatchedClosing, pos));
            }

            let Some(ch) = rest.chars().next() else {
                break;
            };
            if ch.is_whitespace() {
                self.flush();
            } else {
                self.current.push(ch);
                if let Some(open) = self.open.as_mut() {
                    // The token in progress is the first covered one
                    open.start.get_or_insert(self.tokens.len());
                }
            }
            pos += ch.len_utf8();
        }

        self.flush();

        if let Some(open) = self.open {
            return Err(malformed(MalformedKind::Unclosed, open.offset));
        }

        log::trace!(
            "tokenized {} tokens with {} markables",
            self.tokens.len(),
            self.markables.len()
        );

        Ok(Annotation::from_parts(self.tokens, self.markables))
    }

    fn begin(&mut self, offset: usize) -> Result<()> {
        if self.open.is_some() {
            return Err(malformed(MalformedKind::NestedOpening, offset));
        }
        self.open = Some(OpenMarkable {
            offset,
            start: None,
        });
        Ok(())
    }

    fn close(&mut self, offset: usize) -> Result<()> {
        let Some(open) = self.open.take() else {
            return Err(malformed(MalformedKind::UnmatchedClosing, offset));
        };
        let Some(start) = open.start else {
            return Err(malformed(MalformedKind::EmptyMarkable, open.offset));
        };

        // `start` is the token in progress or an already flushed one
        let end = if self.current.is_empty() {
            self.tokens.len() - 1
        } else {
            self.tokens.len()
        };
        if self.markables.last().is_some_and(|last| last.end >= start) {
            return Err(malformed(MalformedKind::SharedToken, open.offset));
        }
        self.markables.push(Markable::new(start, end));
        Ok(())
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.tokens.push(Token {
                index: self.tokens.len(),
                text: std::mem::take(&mut self.current),
            });
        }
    }
}

fn malformed(kind: MalformedKind, offset: usize) -> Error {
    Error::MalformedAnnotation { kind, offset }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(ann: &Annotation) -> Vec<&str> {
        ann.tokens().iter().map(|t| t.text.as_str()).collect()
    }

    fn kind_of(result: Result<Annotation>) -> MalformedKind {
        match result {
            Err(Error::MalformedAnnotation { kind, .. }) => kind,
            other => panic!("expected malformed annotation, got {other:?}"),
        }
    }

    #[test]
    fn test_basic_markables() {
        let ann = tokenize("[Er] geht zu [Lisa].", "[", "]").unwrap();
        assert_eq!(texts(&ann), vec!["Er", "geht", "zu", "Lisa."]);
        assert_eq!(ann.markables(), &[Markable::new(0, 0), Markable::new(3, 3)]);
    }

    #[test]
    fn test_multi_token_markable() {
        let ann = tokenize("Sie verließ [den großen Raum], als", "[", "]").unwrap();
        assert_eq!(ann.markables(), &[Markable::new(2, 4)]);
        assert_eq!(ann.tokens()[4].text, "Raum,");
        assert_eq!(ann.markable_texts(), vec!["den großen Raum,"]);
    }

    #[test]
    fn test_adjacent_markables() {
        let ann = tokenize("[Peter] [seinen Mund]", "[", "]").unwrap();
        assert_eq!(ann.markables(), &[Markable::new(0, 0), Markable::new(1, 2)]);

        let inner = tokenize("Haus[tür] zu", "[", "]").unwrap();
        assert_eq!(texts(&inner), vec!["Haustür", "zu"]);
        assert_eq!(inner.markables(), &[Markable::new(0, 0)]);
    }

    #[test]
    fn test_opening_at_word_end_starts_at_next_token() {
        let ann = tokenize("a[ b] c", "[", "]").unwrap();
        assert_eq!(texts(&ann), vec!["a", "b", "c"]);
        assert_eq!(ann.markables(), &[Markable::new(1, 1)]);

        // Mirror of `[a ]b`, which ends the markable on `a`
        let ann = tokenize("[a ]b", "[", "]").unwrap();
        assert_eq!(ann.markables(), &[Markable::new(0, 0)]);
    }

    #[test]
    fn test_opening_after_closed_word_is_not_shared() {
        let ann = tokenize("[a]x[ b] c", "[", "]").unwrap();
        assert_eq!(texts(&ann), vec!["ax", "b", "c"]);
        assert_eq!(ann.markables(), &[Markable::new(0, 0), Markable::new(1, 1)]);
    }

    #[test]
    fn test_markers_separated_by_whitespace() {
        let ann = tokenize("On the border . [ This killing ] of", "[", "]").unwrap();
        assert_eq!(&texts(&ann)[4..6], &["This", "killing"]);
        assert_eq!(ann.markables(), &[Markable::new(4, 5)]);
    }

    #[test]
    fn test_whitespace_collapses() {
        let ann = tokenize("  a \t\n [b   c]\n\n", "[", "]").unwrap();
        assert_eq!(texts(&ann), vec!["a", "b", "c"]);
        assert_eq!(ann.markables(), &[Markable::new(1, 2)]);
    }

    #[test]
    fn test_multi_char_and_unicode_markers() {
        let ann = tokenize("Der <<Hund>> bellt <<laut>>", "<<", ">>").unwrap();
        assert_eq!(texts(&ann), vec!["Der", "Hund", "bellt", "laut"]);
        assert_eq!(ann.markables(), &[Markable::new(1, 1), Markable::new(3, 3)]);

        let ann = tokenize("「東京」 は 「大きい 都市」", "「", "」").unwrap();
        assert_eq!(ann.markables(), &[Markable::new(0, 0), Markable::new(2, 3)]);
    }

    #[test]
    fn test_identical_markers_toggle() {
        let ann = tokenize("|a b| c |d|", "|", "|").unwrap();
        assert_eq!(ann.markables(), &[Markable::new(0, 1), Markable::new(3, 3)]);
    }

    #[test]
    fn test_no_markables() {
        let ann = tokenize("Ali hat Hunde.", "[", "]").unwrap();
        assert_eq!(ann.len(), 3);
        assert!(ann.markables().is_empty());

        let empty = tokenize("", "[", "]").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_unmatched_closing() {
        let err = tokenize("Ali] hat Hunde.", "[", "]").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedAnnotation {
                kind: MalformedKind::UnmatchedClosing,
                offset: 3
            }
        );
    }

    #[test]
    fn test_nested_opening() {
        assert_eq!(
            kind_of(tokenize("[Ali [hat] Hunde]", "[", "]")),
            MalformedKind::NestedOpening
        );
    }

    #[test]
    fn test_unclosed() {
        let err = tokenize("Ali [hat Hunde.", "[", "]").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedAnnotation {
                kind: MalformedKind::Unclosed,
                offset: 4
            }
        );
    }

    #[test]
    fn test_empty_markable() {
        assert_eq!(
            kind_of(tokenize("Ali [ ] hat", "[", "]")),
            MalformedKind::EmptyMarkable
        );
        assert_eq!(
            kind_of(tokenize("Ali[] hat", "[", "]")),
            MalformedKind::EmptyMarkable
        );
    }

    #[test]
    fn test_two_markables_in_one_token() {
        let err = tokenize("[a][b] c", "[", "]").unwrap_err();
        assert_eq!(
            err,
            Error::MalformedAnnotation {
                kind: MalformedKind::SharedToken,
                offset: 3
            }
        );
    }

    #[test]
    fn test_invalid_marker_literals() {
        assert!(matches!(
            tokenize("a b", "", "]"),
            Err(Error::InvalidMarkers(_))
        ));
    }
}
