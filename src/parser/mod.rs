//! Parser: the line-scanning engine and its machinery.
//!
//! - [`engine`] - dispatch loop, pre/post passes, aggregate assembly
//! - [`handler`] - the five-operation recognizer contract
//! - [`tracker`] - transactional section tracking (begin/commit/rollback)
//! - [`coordinator`] - co-handler group coordination per line
//! - [`context`] - the shared mutable parse state
//! - [`handlers`] - concrete recognizers for each construct

pub mod context;
pub mod coordinator;
pub mod engine;
pub mod handler;
pub mod handlers;
pub mod tracker;

pub use context::ParseContext;
pub use coordinator::{CoHandlerCoordinator, DispatchControl};
pub use engine::SlnParser;
pub use handler::{HandlerId, LineControl, LineHandler};
pub use tracker::SectionTracker;
