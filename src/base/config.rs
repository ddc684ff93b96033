use std::fmt;

/// A configuration/platform pair, e.g. `Debug|Any CPU`.
///
/// Used both as a solution-level key and a project-level key. Equality is
/// structural and case-sensitive: two pairs match when both fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConfigItem {
    pub configuration: String,
    pub platform: String,
}

impl ConfigItem {
    pub fn new(configuration: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            configuration: configuration.into(),
            platform: platform.into(),
        }
    }

    /// Parse the `configuration|platform` notation used throughout solution
    /// files. Surrounding whitespace on either side is not significant.
    pub fn parse(text: &str) -> Option<Self> {
        let (configuration, platform) = text.split_once('|')?;
        let configuration = configuration.trim();
        let platform = platform.trim();
        if configuration.is_empty() || platform.is_empty() {
            return None;
        }
        Some(Self::new(configuration, platform))
    }
}

impl fmt::Display for ConfigItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.configuration, self.platform)
    }
}
