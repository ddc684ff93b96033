//! Solution sources: a named on-disk file or an in-memory text stream.

use std::path::Path;

use crate::base::{EncodingTag, RawLine};
use crate::error::SolutionError;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// An ordered, finite line stream with the text encoding in effect.
#[derive(Debug, Clone)]
pub struct SolutionSource {
    name: String,
    text: String,
    encoding: EncodingTag,
}

impl SolutionSource {
    /// Read a solution file from disk, detecting a UTF-8 byte-order mark.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SolutionError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let (encoding, content) = match bytes.strip_prefix(&UTF8_BOM) {
            Some(rest) => (EncodingTag::Utf8Bom, rest),
            None => (EncodingTag::Utf8, bytes.as_slice()),
        };
        let text = String::from_utf8(content.to_vec()).map_err(|e| {
            SolutionError::invalid_invocation(format!(
                "{}: source is not valid UTF-8: {e}",
                path.display()
            ))
        })?;
        Ok(Self {
            name: path.display().to_string(),
            text,
            encoding,
        })
    }

    /// Wrap in-memory solution text under a source identifier.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            encoding: EncodingTag::Utf8,
        }
    }

    /// Reject blank identifiers and empty streams before any line is read.
    pub fn validate(&self) -> Result<(), SolutionError> {
        if self.name.trim().is_empty() {
            return Err(SolutionError::invalid_invocation(
                "empty source identifier",
            ));
        }
        if self.text.is_empty() {
            return Err(SolutionError::invalid_invocation(format!(
                "{}: empty stream",
                self.name
            )));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn encoding(&self) -> EncodingTag {
        self.encoding
    }

    /// Raw line records in source order, numbered from 1.
    pub fn lines(&self) -> impl Iterator<Item = RawLine> + '_ {
        let encoding = self.encoding;
        self.text
            .lines()
            .enumerate()
            .map(move |(index, line)| RawLine::new(line, encoding, index + 1))
    }
}
