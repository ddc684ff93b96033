//! Collaborator contracts for referenced-project loading and dependency
//! linking.
//!
//! The formats of the referenced project files are out of scope here; the
//! engine only invokes these collaborators when the requested scope asks for
//! loaded data, and attaches whatever they produce to the result aggregate.

use crate::error::SolutionError;
use crate::model::{LinkedDependency, LoadedProject, ProjectDependency, ProjectIdentity};
use crate::project::scope::ScopeItems;

/// Produces loaded representations of referenced projects.
pub trait ReferencedProjectLoader {
    /// Materialize zero or more referenced projects. `scope` carries whether
    /// minimal or full loading was requested.
    fn load(
        &mut self,
        projects: &[ProjectIdentity],
        scope: ScopeItems,
    ) -> Result<Vec<LoadedProject>, SolutionError>;
}

/// Associates parsed dependency declarations with loaded projects in a
/// single shallow pass.
pub trait DependencyLinker {
    fn link(
        &mut self,
        dependencies: &[ProjectDependency],
        loaded: &[LoadedProject],
    ) -> Vec<LinkedDependency>;
}

/// Default shallow linker: resolves each declared dependency GUID to the
/// index of the matching loaded project, skipping GUIDs nothing loaded.
#[derive(Debug, Default)]
pub struct GuidLinker;

impl DependencyLinker for GuidLinker {
    fn link(
        &mut self,
        dependencies: &[ProjectDependency],
        loaded: &[LoadedProject],
    ) -> Vec<LinkedDependency> {
        dependencies
            .iter()
            .map(|dependency| LinkedDependency {
                project: dependency.project,
                resolved: dependency
                    .depends_on
                    .iter()
                    .filter_map(|guid| {
                        loaded.iter().position(|entry| &entry.identity.guid == guid)
                    })
                    .collect(),
            })
            .collect()
    }
}
