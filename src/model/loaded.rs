//! Collaborator-produced representations of referenced projects.
//!
//! The loading logic itself lives behind the collaborator traits in
//! [`crate::project::loader`]; these are the records it hands back.

use crate::base::Guid;
use crate::model::ProjectIdentity;

/// How much of a referenced project a loader materialized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LoadDetail {
    /// Identity-level data only.
    Minimal,
    /// Full project content, opaque to this crate.
    Full(String),
}

/// A referenced project as materialized by a loader collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LoadedProject {
    pub identity: ProjectIdentity,
    pub detail: LoadDetail,
}

/// A dependency record associated with loaded projects by the linker
/// collaborator. `resolved` holds indices into the aggregate's loaded set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LinkedDependency {
    pub project: Guid,
    pub resolved: Vec<usize>,
}
