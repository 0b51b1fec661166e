//! Character encodings for annotation files

use crate::error::CliError;
use std::fmt;
use std::str::FromStr;

/// Supported file encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8, a byte order mark is kept as text
    #[default]
    Utf8,
    /// UTF-8 with an optional byte order mark that is stripped
    Utf8Sig,
    /// UTF-16, byte order from the BOM (little endian without one)
    Utf16,
    /// UTF-16 little endian
    Utf16Le,
    /// UTF-16 big endian
    Utf16Be,
    /// ISO-8859-1, every byte is one code point
    Latin1,
    /// Any other label known to `encoding_rs`, e.g. `windows-1252`
    Other(&'static encoding_rs::Encoding),
}

impl FromStr for Encoding {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        let encoding = match normalized.as_str() {
            "utf-8" | "utf8" => Encoding::Utf8,
            "utf-8-sig" | "utf8-sig" => Encoding::Utf8Sig,
            "utf-16" | "utf16" => Encoding::Utf16,
            "utf-16le" | "utf-16-le" | "utf16le" => Encoding::Utf16Le,
            "utf-16be" | "utf-16-be" | "utf16be" => Encoding::Utf16Be,
            // encoding_rs maps these labels to windows-1252
            "latin-1" | "latin1" | "iso-8859-1" | "iso8859-1" | "l1" => Encoding::Latin1,
            _ => encoding_rs::Encoding::for_label(s.trim().as_bytes())
                .map(Encoding::Other)
                .ok_or_else(|| CliError::UnknownEncoding(s.to_string()))?,
        };
        Ok(encoding)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf8Sig => "utf-8-sig",
            Encoding::Utf16 => "utf-16",
            Encoding::Utf16Le => "utf-16le",
            Encoding::Utf16Be => "utf-16be",
            Encoding::Latin1 => "latin-1",
            Encoding::Other(encoding) => encoding.name(),
        };
        f.write_str(name)
    }
}

impl Encoding {
    /// Decode raw file bytes into text; malformed input is an error
    pub fn decode(self, bytes: &[u8]) -> Result<String, CliError> {
        match self {
            Encoding::Utf8 => strict(encoding_rs::UTF_8, bytes),
            Encoding::Utf8Sig => strict(
                encoding_rs::UTF_8,
                bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes),
            ),
            Encoding::Utf16 => match encoding_rs::Encoding::for_bom(bytes) {
                Some((encoding, bom_len)) if encoding != encoding_rs::UTF_8 => {
                    strict(encoding, &bytes[bom_len..])
                }
                _ => strict(encoding_rs::UTF_16LE, bytes),
            },
            Encoding::Utf16Le => strict(encoding_rs::UTF_16LE, bytes),
            Encoding::Utf16Be => strict(encoding_rs::UTF_16BE, bytes),
            Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
            Encoding::Other(encoding) => strict(encoding, bytes),
        }
    }
}

fn strict(encoding: &'static encoding_rs::Encoding, bytes: &[u8]) -> Result<String, CliError> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| CliError::Decoding(format!("malformed {} input", encoding.name())))
}
