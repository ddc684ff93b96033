//! The top-level `Global` / `EndGlobal` block.

use crate::base::RawLine;
use crate::error::SolutionError;
use crate::model::{SectionData, SectionKind};
use crate::parser::context::ParseContext;
use crate::parser::handler::LineHandler;

#[derive(Debug, Default)]
pub struct GlobalHandler;

impl LineHandler for GlobalHandler {
    fn name(&self) -> &'static str {
        "global"
    }

    fn condition(&self, line: &RawLine) -> bool {
        let trimmed = line.trimmed();
        trimmed == "Global" || trimmed == "EndGlobal"
    }

    fn is_activated(&self, ctx: &ParseContext) -> bool {
        ctx.open_kind().is_none() || ctx.open_kind() == Some(SectionKind::Global)
    }

    fn positioned(
        &mut self,
        ctx: &mut ParseContext,
        line: &RawLine,
    ) -> Result<bool, SolutionError> {
        match line.trimmed() {
            "Global" if ctx.open_kind().is_none() => {
                ctx.stage(SectionKind::Global, SectionData::Block);
                Ok(true)
            }
            "EndGlobal" if ctx.open_kind() == Some(SectionKind::Global) => {
                ctx.stage_close();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
