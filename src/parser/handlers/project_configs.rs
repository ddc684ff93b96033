//! The `GlobalSection(ProjectConfigurationPlatforms)` matrix.
//!
//! Entry lines come in pairs per project and solution configuration:
//! `.ActiveCfg` declares the project-side pair, `.Build.0` enables the build
//! for it. `.Deploy.0` lines are recognized and consumed without producing
//! an entry.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::base::{ConfigItem, Guid, RawLine};
use crate::error::SolutionError;
use crate::model::{ProjectConfigEntry, SectionData, SectionKind};
use crate::parser::context::ParseContext;
use crate::parser::handler::LineHandler;
use crate::policy::Recovery;

static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^GlobalSection\(ProjectConfigurationPlatforms\)\s*=\s*\w+\s*$").unwrap()
});

static ENTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<guid>\{[^}]+\})\.(?P<cfg>.+?)\.(?P<action>ActiveCfg|Build\.0|Deploy\.0)\s*=\s*(?P<value>.+?)\s*$",
    )
    .unwrap()
});

#[derive(Debug, Default)]
pub struct ProjectConfigsHandler;

impl ProjectConfigsHandler {
    fn parse_entry(text: &str) -> Option<SectionData> {
        let captures = ENTRY.captures(text)?;
        let project = Guid::parse(&captures["guid"]).ok()?;
        let solution_config = ConfigItem::parse(&captures["cfg"])?;
        match &captures["action"] {
            "ActiveCfg" => {
                let project_config = ConfigItem::parse(&captures["value"])?;
                Some(SectionData::ProjectConfig(ProjectConfigEntry {
                    project_guid: project,
                    solution_config,
                    project_config,
                    build_enabled: false,
                }))
            }
            "Build.0" => Some(SectionData::ProjectConfigBuild {
                project,
                solution_config,
            }),
            // Deploy.0 and friends: recognized, no model counterpart.
            _ => Some(SectionData::Block),
        }
    }
}

impl LineHandler for ProjectConfigsHandler {
    fn name(&self) -> &'static str {
        "project-configs"
    }

    fn condition(&self, line: &RawLine) -> bool {
        let trimmed = line.trimmed();
        trimmed.starts_with("GlobalSection(ProjectConfigurationPlatforms)")
            || trimmed == "EndGlobalSection"
            || trimmed.contains('=')
    }

    fn is_activated(&self, ctx: &ParseContext) -> bool {
        ctx.open_kind() == Some(SectionKind::ProjectConfigs)
            || ctx.open_kind() == Some(SectionKind::Global)
    }

    fn positioned(
        &mut self,
        ctx: &mut ParseContext,
        line: &RawLine,
    ) -> Result<bool, SolutionError> {
        let trimmed = line.trimmed();

        if ctx.open_kind() == Some(SectionKind::ProjectConfigs) {
            if trimmed == "EndGlobalSection" {
                ctx.stage_close();
                return Ok(true);
            }
            let data = match Self::parse_entry(trimmed) {
                Some(data) => data,
                None => {
                    let error = ctx.malformed("project configuration entry", line);
                    match ctx.recover(error)? {
                        Recovery::Substitute(corrected) => match Self::parse_entry(&corrected) {
                            Some(data) => data,
                            None => return Ok(true),
                        },
                        Recovery::Proceed => return Ok(true),
                    }
                }
            };
            if !matches!(data, SectionData::Block) {
                ctx.stage(SectionKind::ProjectConfigEntry, data);
            }
            return Ok(true);
        }

        if HEADER.is_match(trimmed) {
            ctx.stage(SectionKind::ProjectConfigs, SectionData::Block);
            return Ok(true);
        }
        Ok(false)
    }
}
