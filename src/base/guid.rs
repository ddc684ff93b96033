use std::fmt;

use uuid::Uuid;

/// Normalized project identifier.
///
/// Solution files write GUIDs braced and uppercase (`{FAE04EC0-...}`), project
/// files often lowercase and bare. Parsing accepts both; display always
/// produces the braced uppercase canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Guid(Uuid);

impl Guid {
    /// Parse a GUID from braced (`{...}`), parenthesized, or bare hyphenated
    /// form, case-insensitively.
    pub fn parse(text: &str) -> Result<Self, uuid::Error> {
        let inner = text
            .trim()
            .trim_start_matches(['{', '('])
            .trim_end_matches(['}', ')']);
        Uuid::parse_str(inner).map(Self)
    }

    /// Generate a fresh unique GUID (fixture construction).
    pub fn new_unique() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Uuid::encode_buffer();
        write!(f, "{{{}}}", self.0.hyphenated().encode_upper(&mut buf))
    }
}
