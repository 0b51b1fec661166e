//! Input handling module

pub mod encoding;
pub mod file_reader;

pub use encoding::Encoding;
pub use file_reader::FileReader;
