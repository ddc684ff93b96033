//! Foundation types for the solv toolchain.
//!
//! This module provides fundamental types used throughout the parser:
//! - [`Guid`] - Normalized project identifiers
//! - [`ConfigItem`] - Configuration/platform pairs
//! - [`RawLine`], [`EncodingTag`] - Per-line source records
//! - [`LineRange`] - Section origin spans
//!
//! This module has NO dependencies on other solv modules.

mod config;
mod guid;
mod line;

pub use config::ConfigItem;
pub use guid::Guid;
pub use line::{EncodingTag, LineRange, RawLine};
