//! Project management: solution sources, scope selection, and the
//! referenced-project collaborator contracts.

pub mod loader;
pub mod scope;
pub mod source;

pub use loader::{DependencyLinker, GuidLinker, ReferencedProjectLoader};
pub use scope::ScopeItems;
pub use source::SolutionSource;
