//! Transactional section tracking.
//!
//! A handler's tentative interpretation of a line is staged into a pending
//! transaction that the dispatch loop either commits or rolls back. Staged
//! work never touches the durable store directly: the candidate section and
//! any staged block close are applied only on commit, so rollback is a drop
//! and leaves committed state and the open-section stack untouched.

use crate::base::LineRange;
use crate::model::{Section, SectionData, SectionKind};
use crate::parser::handler::HandlerId;

/// Index of a committed section in the flat registry.
pub type SectionId = usize;

#[derive(Debug, Default)]
struct Transaction {
    owner: Option<HandlerId>,
    candidate: Option<Section>,
    close: bool,
}

/// Committed sections plus at most one pending line-handler transaction.
///
/// Block sections are committed by the transaction of their opening line and
/// stay on the open stack until a later transaction stages their close.
#[derive(Debug, Default)]
pub struct SectionTracker {
    committed: Vec<Section>,
    open: Vec<SectionId>,
    pending: Option<Transaction>,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a transaction for one line-handler attempt. An ownerless
    /// transaction exists only to keep stack depth consistent with call
    /// depth; it stages nothing and rolls back trivially.
    pub fn begin(&mut self, owner: Option<HandlerId>) {
        debug_assert!(self.pending.is_none(), "transaction already in flight");
        self.pending = Some(Transaction {
            owner,
            ..Transaction::default()
        });
    }

    /// Stage a candidate section into the pending transaction.
    pub fn stage(&mut self, section: Section) {
        let tx = self
            .pending
            .as_mut()
            .expect("stage outside of a transaction");
        debug_assert!(tx.owner.is_some(), "stage in an ownerless transaction");
        tx.candidate = Some(section);
    }

    /// Stage closing the innermost open block section.
    pub fn stage_close(&mut self) {
        let tx = self
            .pending
            .as_mut()
            .expect("stage_close outside of a transaction");
        debug_assert!(tx.owner.is_some(), "close in an ownerless transaction");
        tx.close = true;
    }

    /// Merge the pending transaction into the durable store. Returns the
    /// committed candidate's payload so the caller can absorb it into the
    /// typed collections.
    pub fn commit(&mut self, end_line: usize) -> Option<SectionData> {
        let tx = self.pending.take()?;
        if tx.close {
            if let Some(id) = self.open.pop() {
                self.committed[id].lines.end = end_line;
            }
        }
        let section = tx.candidate?;
        let id = self.committed.len();
        let is_block = section.kind.is_block();
        let data = section.data.clone();
        self.committed.push(section);
        if is_block {
            self.open.push(id);
        }
        Some(data)
    }

    /// Discard the pending transaction. Strictly local to one line-handler
    /// attempt; committed sections and the open stack are untouched.
    pub fn rollback(&mut self) {
        self.pending = None;
    }

    /// Kind of the innermost open block section.
    pub fn open_kind(&self) -> Option<SectionKind> {
        self.open_section().map(|s| s.kind)
    }

    /// The innermost open block section.
    pub fn open_section(&self) -> Option<&Section> {
        self.open.last().map(|&id| &self.committed[id])
    }

    /// Whether any open block section has the given kind.
    pub fn in_section(&self, kind: SectionKind) -> bool {
        self.open.iter().any(|&id| self.committed[id].kind == kind)
    }

    pub fn committed(&self) -> &[Section] {
        &self.committed
    }

    pub fn open_depth(&self) -> usize {
        self.open.len()
    }

    pub fn into_committed(self) -> Vec<Section> {
        self.committed
    }
}

/// Build a single-line section candidate at the given line.
pub fn section_at(kind: SectionKind, data: SectionData, line: usize) -> Section {
    Section {
        kind,
        data,
        lines: LineRange::single(line),
    }
}
