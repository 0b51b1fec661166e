//! Domain layer: annotations and how they are read from text

pub mod alignment;
pub mod annotation;
pub mod markers;
pub mod tokenizer;

pub use alignment::validate;
pub use annotation::{Annotation, Markable, Token};
pub use markers::Markers;
pub use tokenizer::{tokenize, tokenize_with};
