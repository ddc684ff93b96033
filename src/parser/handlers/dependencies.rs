//! Build-order dependency declarations inside project entries.
//!
//! Co-handles project entry lines with [`super::project::ProjectHandler`]:
//! the project handler records structural membership and identity, this one
//! tracks which project is current so `ProjectSection(ProjectDependencies)`
//! entries can be attributed to it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::base::{Guid, RawLine};
use crate::error::SolutionError;
use crate::model::{SectionData, SectionKind};
use crate::parser::context::ParseContext;
use crate::parser::handler::LineHandler;
use crate::parser::handlers::project::{PROJECT_GROUP, PROJECT_HEADER};
use crate::policy::Recovery;

static DEPS_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ProjectSection\(ProjectDependencies\)\s*=\s*postProject\s*$").unwrap());

static DEP_ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<dep>\{[^}]+\})\s*=\s*\{[^}]+\}\s*$").unwrap());

/// Recognizes `ProjectSection(ProjectDependencies)` blocks and their
/// `{guid} = {guid}` entries.
#[derive(Debug, Default)]
pub struct ProjectDependenciesHandler {
    current_project: Option<Guid>,
}

impl LineHandler for ProjectDependenciesHandler {
    fn name(&self) -> &'static str {
        "project-dependencies"
    }

    fn co_group(&self) -> Option<&'static str> {
        Some(PROJECT_GROUP)
    }

    fn condition(&self, line: &RawLine) -> bool {
        let trimmed = line.trimmed();
        trimmed.starts_with("Project(")
            || trimmed == "EndProject"
            || trimmed.starts_with("ProjectSection(ProjectDependencies)")
            || trimmed == "EndProjectSection"
            || (trimmed.starts_with('{') && trimmed.contains('='))
    }

    fn is_activated(&self, ctx: &ParseContext) -> bool {
        ctx.in_section(SectionKind::Project) || self.current_project.is_some()
    }

    fn positioned(
        &mut self,
        ctx: &mut ParseContext,
        line: &RawLine,
    ) -> Result<bool, SolutionError> {
        let trimmed = line.trimmed();

        if let Some(captures) = PROJECT_HEADER.captures(trimmed) {
            self.current_project = Guid::parse(&captures["guid"]).ok();
            return Ok(true);
        }
        if trimmed == "EndProject" {
            self.current_project = None;
            return Ok(true);
        }
        if DEPS_HEADER.is_match(trimmed) {
            if ctx.open_kind() != Some(SectionKind::Project) {
                return Ok(false);
            }
            ctx.stage(SectionKind::ProjectDependencies, SectionData::Block);
            return Ok(true);
        }
        if trimmed == "EndProjectSection" {
            if ctx.open_kind() != Some(SectionKind::ProjectDependencies) {
                return Ok(false);
            }
            ctx.stage_close();
            return Ok(true);
        }

        if ctx.open_kind() != Some(SectionKind::ProjectDependencies) {
            return Ok(false);
        }
        let Some(project) = self.current_project else {
            return Ok(false);
        };
        let depends_on = match DEP_ENTRY
            .captures(trimmed)
            .and_then(|c| Guid::parse(&c["dep"]).ok())
        {
            Some(guid) => guid,
            None => {
                let error = ctx.malformed("project dependency", line);
                match ctx.recover(error)? {
                    Recovery::Substitute(corrected) => match Guid::parse(&corrected) {
                        Ok(guid) => guid,
                        Err(_) => return Ok(true),
                    },
                    Recovery::Proceed => return Ok(true),
                }
            }
        };
        ctx.stage(
            SectionKind::DependencyEntry,
            SectionData::Dependency {
                project,
                depends_on,
            },
        );
        Ok(true)
    }
}
