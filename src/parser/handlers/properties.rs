//! Key/value property sections: `GlobalSection(SolutionProperties)` and
//! `GlobalSection(ExtensibilityGlobals)`. Both fold their entries into the
//! aggregate's global properties.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::base::RawLine;
use crate::error::SolutionError;
use crate::model::{SectionData, SectionKind};
use crate::parser::context::ParseContext;
use crate::parser::handler::LineHandler;

static ENTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<key>[^=]+?)\s*=\s*(?P<value>.*)$").unwrap());

/// One handler instance per property-bearing global section.
#[derive(Debug)]
pub struct PropertySectionHandler {
    name: &'static str,
    header_prefix: &'static str,
    section: SectionKind,
}

impl PropertySectionHandler {
    pub fn solution_properties() -> Self {
        Self {
            name: "solution-properties",
            header_prefix: "GlobalSection(SolutionProperties)",
            section: SectionKind::SolutionProperties,
        }
    }

    pub fn extensibility_globals() -> Self {
        Self {
            name: "extensibility-globals",
            header_prefix: "GlobalSection(ExtensibilityGlobals)",
            section: SectionKind::ExtensibilityGlobals,
        }
    }
}

impl LineHandler for PropertySectionHandler {
    fn name(&self) -> &'static str {
        self.name
    }

    fn condition(&self, line: &RawLine) -> bool {
        let trimmed = line.trimmed();
        trimmed.starts_with(self.header_prefix)
            || trimmed == "EndGlobalSection"
            || trimmed.contains('=')
    }

    fn is_activated(&self, ctx: &ParseContext) -> bool {
        ctx.open_kind() == Some(self.section) || ctx.open_kind() == Some(SectionKind::Global)
    }

    fn positioned(
        &mut self,
        ctx: &mut ParseContext,
        line: &RawLine,
    ) -> Result<bool, SolutionError> {
        let trimmed = line.trimmed();

        if ctx.open_kind() == Some(self.section) {
            if trimmed == "EndGlobalSection" {
                ctx.stage_close();
                return Ok(true);
            }
            let Some(captures) = ENTRY.captures(trimmed) else {
                return Ok(false);
            };
            ctx.stage(
                SectionKind::PropertyEntry,
                SectionData::Property {
                    key: captures["key"].to_string(),
                    value: captures["value"].to_string(),
                },
            );
            return Ok(true);
        }

        if trimmed.starts_with(self.header_prefix) {
            ctx.stage(self.section, SectionData::Block);
            return Ok(true);
        }
        Ok(false)
    }
}
