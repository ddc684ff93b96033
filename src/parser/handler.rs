//! The line-handler contract.
//!
//! Handlers are pluggable recognizers registered in a fixed order that also
//! defines precedence. The capability set is split so the engine can
//! short-circuit cheaply:
//! - [`LineHandler::condition`] - cheap, side-effect-free syntactic
//!   pre-filter over the line alone
//! - [`LineHandler::is_activated`] - state-dependent eligibility test over
//!   the parse context (e.g. "currently inside a Project block")
//! - [`LineHandler::positioned`] - the stateful consume attempt; stages work
//!   into the pending transaction and reports whether it interpreted the line

use crate::base::RawLine;
use crate::error::SolutionError;
use crate::parser::context::ParseContext;

/// Stable token identifying a registered handler; assigned by registration
/// position and used by the co-handler coordinator.
pub type HandlerId = u16;

/// Whether a handler's attempts participate in transactional tracking.
/// `Ignore` handlers never open a transaction and thus can never roll back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineControl {
    #[default]
    Process,
    Ignore,
}

/// A pluggable recognizer for one or more section kinds.
///
/// Handlers carry state across lines within one parse and are therefore not
/// shared across concurrent parses; instantiate a fresh set per parse.
pub trait LineHandler {
    /// Short name for logs and diagnostics.
    fn name(&self) -> &'static str;

    fn line_control(&self) -> LineControl {
        LineControl::Process
    }

    /// Handlers sharing a group id cooperate on the same line; a handler
    /// with no group exclusively owns any line it successfully consumes.
    fn co_group(&self) -> Option<&'static str> {
        None
    }

    /// Cheap syntactic pre-filter. Must not mutate anything.
    fn condition(&self, line: &RawLine) -> bool;

    /// Whether the current nesting/section state makes this handler eligible
    /// to act now.
    fn is_activated(&self, ctx: &ParseContext) -> bool;

    /// Attempt to consume the line. Stage candidate sections through the
    /// context; return `Ok(true)` on a successful interpretation, `Ok(false)`
    /// to fall through to later handlers. Structural failures routed through
    /// the exception policy surface as `Err` only when the policy aborts.
    fn positioned(&mut self, ctx: &mut ParseContext, line: &RawLine)
    -> Result<bool, SolutionError>;

    /// Invoked once before the first line, in registration order.
    fn pre_process(&mut self, _ctx: &mut ParseContext) {}

    /// Invoked once after the last line, in registration order.
    fn post_process(&mut self, _ctx: &mut ParseContext) {}
}
