//! The `GlobalSection(SolutionConfigurationPlatforms)` matrix.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::base::{ConfigItem, RawLine};
use crate::error::SolutionError;
use crate::model::{SectionData, SectionKind};
use crate::parser::context::ParseContext;
use crate::parser::handler::LineHandler;
use crate::policy::Recovery;

static HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^GlobalSection\(SolutionConfigurationPlatforms\)\s*=\s*\w+\s*$").unwrap()
});

/// Recognizes the section header, its `cfg|platform = cfg|platform` entries,
/// and `EndGlobalSection`. Declaration order of the entries is preserved; it
/// drives the ordering contract of the cross-reference index.
#[derive(Debug, Default)]
pub struct SolutionConfigsHandler;

impl LineHandler for SolutionConfigsHandler {
    fn name(&self) -> &'static str {
        "solution-configs"
    }

    fn condition(&self, line: &RawLine) -> bool {
        let trimmed = line.trimmed();
        trimmed.starts_with("GlobalSection(SolutionConfigurationPlatforms)")
            || trimmed == "EndGlobalSection"
            || trimmed.contains('=')
    }

    fn is_activated(&self, ctx: &ParseContext) -> bool {
        ctx.open_kind() == Some(SectionKind::SolutionConfigs)
            || ctx.open_kind() == Some(SectionKind::Global)
    }

    fn positioned(
        &mut self,
        ctx: &mut ParseContext,
        line: &RawLine,
    ) -> Result<bool, SolutionError> {
        let trimmed = line.trimmed();

        if ctx.open_kind() == Some(SectionKind::SolutionConfigs) {
            if trimmed == "EndGlobalSection" {
                ctx.stage_close();
                return Ok(true);
            }
            let Some((declared, _)) = trimmed.split_once('=') else {
                return Ok(false);
            };
            let item = match ConfigItem::parse(declared) {
                Some(item) => item,
                None => {
                    let error = ctx.malformed("solution configuration pair", line);
                    match ctx.recover(error)? {
                        Recovery::Substitute(corrected) => match ConfigItem::parse(&corrected) {
                            Some(item) => item,
                            None => return Ok(true),
                        },
                        Recovery::Proceed => return Ok(true),
                    }
                }
            };
            ctx.stage(
                SectionKind::SolutionConfigEntry,
                SectionData::SolutionConfig(item),
            );
            return Ok(true);
        }

        if HEADER.is_match(trimmed) {
            ctx.stage(SectionKind::SolutionConfigs, SectionData::Block);
            return Ok(true);
        }
        Ok(false)
    }
}
