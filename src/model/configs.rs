//! Per-project configuration records and the composite join row.

use crate::base::{ConfigItem, Guid};
use crate::model::ProjectIdentity;

/// One project-level configuration declaration.
///
/// Relates to a solution-level [`ConfigItem`] by structural equality of
/// `solution_config`, never by identity.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProjectConfigEntry {
    pub project_guid: Guid,
    pub solution_config: ConfigItem,
    pub project_config: ConfigItem,
    /// True when a `.Build.0` line accompanied the `.ActiveCfg` declaration.
    pub build_enabled: bool,
}

/// Denormalized join of a project identity, a solution configuration, and a
/// matching project configuration entry.
///
/// Derived, never hand-constructed; regenerated wholesale on every parse.
/// `project_item` is `None` when no project carries the entry's GUID — an
/// explicit valid state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProjectItemCfg {
    pub project_item: Option<ProjectIdentity>,
    pub solution_config: ConfigItem,
    pub project_config_entry: ProjectConfigEntry,
}
