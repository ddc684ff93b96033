//! # solv-base
//!
//! Core library for parsing Visual Studio solution files into a typed model.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Sources, scope selection, loader collaborators
//!   ↓
//! resolve   → Configuration cross-referencing, default selection
//!   ↓
//! parser    → Line handlers, transactional tracker, dispatch engine
//!   ↓
//! model     → Typed solution model (sections, projects, configs)
//!   ↓
//! base      → Primitives (Guid, ConfigItem, RawLine)
//! ```
//!
//! `error` and `policy` cut across all layers: every structural failure is
//! routed through the strict/lenient [`policy::ExceptionPolicy`].
//!
//! The engine makes exactly one forward pass over the input. Lines no
//! handler recognizes are preserved verbatim on the result aggregate, so
//! unknown constructs survive a parse untouched.

// ============================================================================
// MODULES (dependency order: base → model → parser → resolve → project)
// ============================================================================

/// Foundation types: Guid, ConfigItem, RawLine, LineRange
pub mod base;

/// Error types and failure kinds
pub mod error;

/// Strict/lenient exception policy with recovery registry
pub mod policy;

/// Typed solution model and the result aggregate
pub mod model;

/// Line-scanning engine: handlers, tracker, coordinator, dispatch
pub mod parser;

/// Cross-reference resolution and default selection
pub mod resolve;

/// Sources, scope selection, loader collaborators
pub mod project;

use std::path::Path;

// Re-export the types most callers need
pub use base::{ConfigItem, EncodingTag, Guid};
pub use error::{FailureKind, SolutionError};
pub use model::Solution;
pub use parser::SlnParser;
pub use policy::{ExceptionPolicy, PolicyMode, Recovery};
pub use project::{ScopeItems, SolutionSource};

/// Parse a solution file from disk with the standard handler set and a
/// strict policy.
pub fn parse_file(path: impl AsRef<Path>, scope: ScopeItems) -> Result<Solution, SolutionError> {
    let source = SolutionSource::from_path(path)?;
    SlnParser::new().parse(source, scope)
}

/// Parse in-memory solution text under a source identifier.
pub fn parse_str(name: &str, text: &str, scope: ScopeItems) -> Result<Solution, SolutionError> {
    SlnParser::new().parse(SolutionSource::from_text(name, text), scope)
}
