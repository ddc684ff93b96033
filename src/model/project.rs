//! Project identity and relationship records.

use crate::base::Guid;

/// Identity of one project entry in the solution.
///
/// The GUID is unique within one parse; a later declaration sharing a GUID
/// overwrites the earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProjectIdentity {
    pub guid: Guid,
    pub name: String,
    /// Path as written in the source, usually relative to the solution.
    pub path: String,
    /// Project-kind GUID (C# library, folder, ...).
    pub project_type: Guid,
}

/// A child/parent pair from the nested-projects matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NestedProject {
    pub child: Guid,
    pub parent: Guid,
}

/// Build-order dependencies declared in a project entry's
/// `ProjectSection(ProjectDependencies)` block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProjectDependency {
    pub project: Guid,
    pub depends_on: Vec<Guid>,
}
