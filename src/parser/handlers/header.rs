//! Header-area recognizers: the format-version declaration, the
//! `VisualStudioVersion` property lines, and `#` comments.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::base::RawLine;
use crate::error::SolutionError;
use crate::model::{SectionData, SectionKind};
use crate::parser::context::ParseContext;
use crate::parser::handler::{LineControl, LineHandler};
use crate::policy::Recovery;

static FORMAT_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^Microsoft Visual Studio Solution File,\s*Format Version\s*(?P<version>[0-9]+(?:\.[0-9]+)?)\s*$",
    )
    .unwrap()
});

static VERSION_PROPERTY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<key>MinimumVisualStudioVersion|VisualStudioVersion)\s*=\s*(?P<value>\S+)\s*$")
        .unwrap()
});

/// Recognizes the `Format Version` declaration, once per parse.
#[derive(Debug, Default)]
pub struct FormatVersionHandler;

impl LineHandler for FormatVersionHandler {
    fn name(&self) -> &'static str {
        "format-version"
    }

    fn condition(&self, line: &RawLine) -> bool {
        line.trimmed()
            .starts_with("Microsoft Visual Studio Solution File")
    }

    fn is_activated(&self, ctx: &ParseContext) -> bool {
        ctx.format_version.is_none() && ctx.open_kind().is_none()
    }

    fn positioned(
        &mut self,
        ctx: &mut ParseContext,
        line: &RawLine,
    ) -> Result<bool, SolutionError> {
        let text = match FORMAT_VERSION.captures(line.trimmed()) {
            Some(captures) => captures["version"].to_string(),
            None => {
                let error = ctx.malformed("format version", line);
                match ctx.recover(error)? {
                    Recovery::Substitute(version) => version,
                    Recovery::Proceed => return Ok(true),
                }
            }
        };
        ctx.stage(SectionKind::FormatVersion, SectionData::FormatVersion(text));
        Ok(true)
    }
}

/// Recognizes `VisualStudioVersion` / `MinimumVisualStudioVersion` lines and
/// folds them into the global properties.
#[derive(Debug, Default)]
pub struct VersionPropertyHandler;

impl LineHandler for VersionPropertyHandler {
    fn name(&self) -> &'static str {
        "version-property"
    }

    fn condition(&self, line: &RawLine) -> bool {
        let trimmed = line.trimmed();
        trimmed.starts_with("VisualStudioVersion")
            || trimmed.starts_with("MinimumVisualStudioVersion")
    }

    fn is_activated(&self, ctx: &ParseContext) -> bool {
        ctx.open_kind().is_none()
    }

    fn positioned(
        &mut self,
        ctx: &mut ParseContext,
        line: &RawLine,
    ) -> Result<bool, SolutionError> {
        let Some(captures) = VERSION_PROPERTY.captures(line.trimmed()) else {
            return Ok(false);
        };
        ctx.stage(
            SectionKind::PropertyEntry,
            SectionData::Property {
                key: captures["key"].to_string(),
                value: captures["value"].to_string(),
            },
        );
        Ok(true)
    }
}

/// Consumes `#` comment lines. Runs outside transactional tracking and
/// retains the original text on the aggregate.
#[derive(Debug, Default)]
pub struct CommentHandler;

impl LineHandler for CommentHandler {
    fn name(&self) -> &'static str {
        "comment"
    }

    fn line_control(&self) -> LineControl {
        LineControl::Ignore
    }

    fn condition(&self, line: &RawLine) -> bool {
        line.trimmed().starts_with('#')
    }

    fn is_activated(&self, _ctx: &ParseContext) -> bool {
        true
    }

    fn positioned(
        &mut self,
        ctx: &mut ParseContext,
        line: &RawLine,
    ) -> Result<bool, SolutionError> {
        ctx.comments.push(line.text.clone());
        Ok(true)
    }
}
