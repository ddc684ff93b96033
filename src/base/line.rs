use std::fmt;

/// Text encoding in effect for a line source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EncodingTag {
    #[default]
    Utf8,
    /// UTF-8 with a byte-order mark, the form Visual Studio writes.
    Utf8Bom,
}

impl fmt::Display for EncodingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingTag::Utf8 => write!(f, "utf-8"),
            EncodingTag::Utf8Bom => write!(f, "utf-8 (BOM)"),
        }
    }
}

/// Immutable per-line record produced by a line source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    pub text: String,
    pub encoding: EncodingTag,
    /// 1-based position in the source.
    pub number: usize,
}

impl RawLine {
    pub fn new(text: impl Into<String>, encoding: EncodingTag, number: usize) -> Self {
        Self {
            text: text.into(),
            encoding,
            number,
        }
    }

    /// The line with leading and trailing whitespace removed; handlers match
    /// against this form.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// Inclusive 1-based line range a section spans in its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }
}
