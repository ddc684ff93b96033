//! Concrete line recognizers for the solution format.
//!
//! Each handler is a small regex/prefix match over one construct; the
//! engineering weight lives in the dispatch/tracking machinery they plug
//! into. One construct per file, mirroring the extractor-per-construct
//! layout used elsewhere in this codebase.

mod dependencies;
mod global;
mod header;
mod nested;
mod project;
mod project_configs;
mod properties;
mod solution_configs;

pub use dependencies::ProjectDependenciesHandler;
pub use global::GlobalHandler;
pub use header::{CommentHandler, FormatVersionHandler, VersionPropertyHandler};
pub use nested::NestedProjectsHandler;
pub use project::ProjectHandler;
pub use project_configs::ProjectConfigsHandler;
pub use properties::PropertySectionHandler;
pub use solution_configs::SolutionConfigsHandler;

use crate::parser::handler::LineHandler;

/// The standard pipeline in registration (= precedence) order.
///
/// The project handler and the dependency handler share a co-handler group:
/// both jointly claim project entry lines, one recording identity, the other
/// dependency attribution.
pub fn default_handlers() -> Vec<Box<dyn LineHandler>> {
    vec![
        Box::new(FormatVersionHandler),
        Box::new(VersionPropertyHandler),
        Box::new(CommentHandler),
        Box::new(ProjectHandler),
        Box::new(ProjectDependenciesHandler::default()),
        Box::new(GlobalHandler),
        Box::new(SolutionConfigsHandler),
        Box::new(ProjectConfigsHandler),
        Box::new(PropertySectionHandler::solution_properties()),
        Box::new(PropertySectionHandler::extensibility_globals()),
        Box::new(NestedProjectsHandler),
    ]
}
