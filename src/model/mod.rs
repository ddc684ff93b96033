//! Typed solution model: sections, entity records, and the result aggregate.

mod configs;
mod loaded;
mod project;
mod section;
mod solution;

pub use configs::{ProjectConfigEntry, ProjectItemCfg};
pub use loaded::{LinkedDependency, LoadDetail, LoadedProject};
pub use project::{NestedProject, ProjectDependency, ProjectIdentity};
pub use section::{Section, SectionData, SectionKind};
pub use solution::Solution;
