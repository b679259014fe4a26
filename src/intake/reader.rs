//! Decodes raw file bytes into text under a configured encoding.

use crate::errors::{Error, Result};

/// Text encoding used when decoding file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// Strict UTF-8; invalid byte sequences are a processing error.
    #[default]
    Utf8,
    /// UTF-8 with invalid sequences replaced by U+FFFD.
    Utf8Lossy,
}

impl TextEncoding {
    /// The label recorded on a [`ProcessedFile`].
    ///
    /// [`ProcessedFile`]: crate::intake::ProcessedFile
    pub fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Lossy => "utf-8 (lossy)",
        }
    }
}

/// Decodes content bytes under the given encoding.
///
/// # Errors
/// Returns [`Error::Processing`] when strict UTF-8 decoding encounters an
/// invalid sequence.
pub(crate) fn decode_text(bytes: Vec<u8>, encoding: TextEncoding, name: &str) -> Result<String> {
    match encoding {
        TextEncoding::Utf8 => String::from_utf8(bytes).map_err(|e| Error::Processing {
            file: name.to_string(),
            reason: format!("content is not valid UTF-8: {e}"),
        }),
        TextEncoding::Utf8Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
    }
}
