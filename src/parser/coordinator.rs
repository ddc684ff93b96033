//! Co-handler coordination.
//!
//! Tracks, for the current line, which grouped handlers have already
//! consumed it. A successful consume by a group-less handler ends dispatch
//! for the line; a grouped handler's consume claims the line for its group,
//! after which only co-members are still offered the remainder of the line.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::parser::handler::HandlerId;

/// What the dispatch loop should do after a successful consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchControl {
    /// The line is fully consumed; stop offering it.
    Stop,
    /// Keep offering the line to the claiming group's remaining members.
    Continue,
}

/// Per-line seen-group-member bookkeeping, reset for every dispatched line.
#[derive(Debug, Default)]
pub struct CoHandlerCoordinator {
    seen: FxHashMap<&'static str, FxHashSet<HandlerId>>,
    claimed: Option<&'static str>,
}

impl CoHandlerCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild for the next line.
    pub fn reset_line(&mut self) {
        self.seen.clear();
        self.claimed = None;
    }

    /// Whether a handler with the given group may still be offered the
    /// current line. Before any claim, every handler is admitted; after a
    /// grouped claim, only that group's members are.
    pub fn admits(&self, group: Option<&'static str>) -> bool {
        match self.claimed {
            None => true,
            Some(claimed) => group == Some(claimed),
        }
    }

    /// Record a successful consume and decide whether dispatch continues.
    pub fn record_consume(
        &mut self,
        id: HandlerId,
        group: Option<&'static str>,
    ) -> DispatchControl {
        match group {
            None => DispatchControl::Stop,
            Some(group) => {
                self.claimed = Some(group);
                self.seen.entry(group).or_default().insert(id);
                DispatchControl::Continue
            }
        }
    }

    /// Whether the given handler already consumed the current line as part
    /// of its group.
    pub fn was_seen(&self, id: HandlerId, group: &'static str) -> bool {
        self.seen.get(group).is_some_and(|ids| ids.contains(&id))
    }
}
