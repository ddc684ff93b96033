//! The `GlobalSection(NestedProjects)` matrix: `{child} = {parent}` pairs
//! describing solution-folder membership.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::base::{Guid, RawLine};
use crate::error::SolutionError;
use crate::model::{NestedProject, SectionData, SectionKind};
use crate::parser::context::ParseContext;
use crate::parser::handler::LineHandler;
use crate::policy::Recovery;

static HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^GlobalSection\(NestedProjects\)\s*=\s*\w+\s*$").unwrap());

static ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<child>\{[^}]+\})\s*=\s*(?P<parent>\{[^}]+\})\s*$").unwrap());

#[derive(Debug, Default)]
pub struct NestedProjectsHandler;

impl NestedProjectsHandler {
    fn parse_entry(text: &str) -> Option<NestedProject> {
        let captures = ENTRY.captures(text)?;
        Some(NestedProject {
            child: Guid::parse(&captures["child"]).ok()?,
            parent: Guid::parse(&captures["parent"]).ok()?,
        })
    }
}

impl LineHandler for NestedProjectsHandler {
    fn name(&self) -> &'static str {
        "nested-projects"
    }

    fn condition(&self, line: &RawLine) -> bool {
        let trimmed = line.trimmed();
        trimmed.starts_with("GlobalSection(NestedProjects)")
            || trimmed == "EndGlobalSection"
            || (trimmed.starts_with('{') && trimmed.contains('='))
    }

    fn is_activated(&self, ctx: &ParseContext) -> bool {
        ctx.open_kind() == Some(SectionKind::NestedProjects)
            || ctx.open_kind() == Some(SectionKind::Global)
    }

    fn positioned(
        &mut self,
        ctx: &mut ParseContext,
        line: &RawLine,
    ) -> Result<bool, SolutionError> {
        let trimmed = line.trimmed();

        if ctx.open_kind() == Some(SectionKind::NestedProjects) {
            if trimmed == "EndGlobalSection" {
                ctx.stage_close();
                return Ok(true);
            }
            let nested = match Self::parse_entry(trimmed) {
                Some(nested) => nested,
                None => {
                    let error = ctx.malformed("nested project pair", line);
                    match ctx.recover(error)? {
                        Recovery::Substitute(corrected) => match Self::parse_entry(&corrected) {
                            Some(nested) => nested,
                            None => return Ok(true),
                        },
                        Recovery::Proceed => return Ok(true),
                    }
                }
            };
            ctx.stage(
                SectionKind::NestedProjectEntry,
                SectionData::NestedProject(nested),
            );
            return Ok(true);
        }

        if HEADER.is_match(trimmed) {
            ctx.stage(SectionKind::NestedProjects, SectionData::Block);
            return Ok(true);
        }
        Ok(false)
    }
}
