//! Sections: typed nodes for recognized structural constructs.
//!
//! A section spans one or more input lines. Block sections (`Project`,
//! `Global`, the `GlobalSection(...)` matrices) are opened by a header line
//! and closed by their end line; entry sections cover exactly one line.

use crate::base::{ConfigItem, Guid, LineRange};
use crate::model::{NestedProject, ProjectConfigEntry, ProjectIdentity};

/// Discriminant for every recognized construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SectionKind {
    FormatVersion,
    Project,
    ProjectDependencies,
    Global,
    SolutionConfigs,
    ProjectConfigs,
    SolutionProperties,
    ExtensibilityGlobals,
    NestedProjects,
    SolutionConfigEntry,
    ProjectConfigEntry,
    PropertyEntry,
    NestedProjectEntry,
    DependencyEntry,
}

impl SectionKind {
    /// Block sections stay open until their end line commits a close.
    pub fn is_block(self) -> bool {
        matches!(
            self,
            SectionKind::Project
                | SectionKind::ProjectDependencies
                | SectionKind::Global
                | SectionKind::SolutionConfigs
                | SectionKind::ProjectConfigs
                | SectionKind::SolutionProperties
                | SectionKind::ExtensibilityGlobals
                | SectionKind::NestedProjects
        )
    }
}

/// Format-specific payload carried by a committed section.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SectionData {
    /// Structural block with no payload of its own (`Global`, matrix headers).
    Block,
    FormatVersion(String),
    Property { key: String, value: String },
    Project(ProjectIdentity),
    Dependency { project: Guid, depends_on: Guid },
    SolutionConfig(ConfigItem),
    ProjectConfig(ProjectConfigEntry),
    /// A `.Build.0` declaration enabling the build for an already-declared
    /// project configuration.
    ProjectConfigBuild {
        project: Guid,
        solution_config: ConfigItem,
    },
    NestedProject(NestedProject),
}

/// A recognized structural construct with its origin lines.
///
/// Sections never form cycles: cross-references go through opaque GUIDs,
/// never structural nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Section {
    pub kind: SectionKind,
    pub data: SectionData,
    pub lines: LineRange,
}

impl Section {
    pub fn new(kind: SectionKind, data: SectionData, line: usize) -> Self {
        Self {
            kind,
            data,
            lines: LineRange::single(line),
        }
    }
}
