//! Project entry blocks: `Project("{type}") = "name", "path", "{guid}"`
//! through `EndProject`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::base::{Guid, RawLine};
use crate::error::SolutionError;
use crate::model::{ProjectIdentity, SectionData, SectionKind};
use crate::parser::context::ParseContext;
use crate::parser::handler::LineHandler;
use crate::policy::Recovery;

pub(crate) static PROJECT_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^Project\("(?P<ptype>\{[^}]+\})"\)\s*=\s*"(?P<name>[^"]*)"\s*,\s*"(?P<path>[^"]*)"\s*,\s*"(?P<guid>\{[^}]+\})"\s*$"#,
    )
    .unwrap()
});

/// Group id shared with the dependency recognizer so both can jointly claim
/// project entry lines.
pub(crate) const PROJECT_GROUP: &str = "project";

/// Opens a project section on the header line, records the identity, and
/// closes the section on `EndProject`.
#[derive(Debug, Default)]
pub struct ProjectHandler;

impl ProjectHandler {
    fn parse_identity(text: &str) -> Option<ProjectIdentity> {
        let captures = PROJECT_HEADER.captures(text)?;
        Some(ProjectIdentity {
            guid: Guid::parse(&captures["guid"]).ok()?,
            name: captures["name"].to_string(),
            path: captures["path"].to_string(),
            project_type: Guid::parse(&captures["ptype"]).ok()?,
        })
    }
}

impl LineHandler for ProjectHandler {
    fn name(&self) -> &'static str {
        "project"
    }

    fn co_group(&self) -> Option<&'static str> {
        Some(PROJECT_GROUP)
    }

    fn condition(&self, line: &RawLine) -> bool {
        let trimmed = line.trimmed();
        trimmed.starts_with("Project(") || trimmed == "EndProject"
    }

    fn is_activated(&self, ctx: &ParseContext) -> bool {
        // Header lines only at the top level; EndProject only with a project
        // section open.
        ctx.open_kind().is_none() || ctx.open_kind() == Some(SectionKind::Project)
    }

    fn positioned(
        &mut self,
        ctx: &mut ParseContext,
        line: &RawLine,
    ) -> Result<bool, SolutionError> {
        let trimmed = line.trimmed();
        if trimmed == "EndProject" {
            if ctx.open_kind() != Some(SectionKind::Project) {
                return Ok(false);
            }
            ctx.stage_close();
            return Ok(true);
        }
        if ctx.open_kind().is_some() {
            return Ok(false);
        }

        let identity = match Self::parse_identity(trimmed) {
            Some(identity) => identity,
            None => {
                let error = ctx.malformed("project entry", line);
                match ctx.recover(error)? {
                    // A substitute supplies a corrected header line.
                    Recovery::Substitute(corrected) => match Self::parse_identity(&corrected) {
                        Some(identity) => identity,
                        None => return Ok(true),
                    },
                    Recovery::Proceed => return Ok(true),
                }
            }
        };
        ctx.stage(SectionKind::Project, SectionData::Project(identity));
        Ok(true)
    }
}
