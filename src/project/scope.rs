//! Scope selection: which derived subsystems a parse should populate.

use bitflags::bitflags;

bitflags! {
    /// Bitmask choosing which derived data a parse produces beyond the raw
    /// entity collections.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ScopeItems: u32 {
        /// Project identity records.
        const PROJECTS = 1 << 0;
        /// Solution-level configuration pairs.
        const SOLUTION_CONFIGS = 1 << 1;
        /// Project-level configuration entries.
        const PROJECT_CONFIGS = 1 << 2;
        /// Cross-referenced environment data: the config index and the
        /// composite join rows.
        const ENV = 1 << 3;
        /// Minimally-loaded referenced projects via the loader collaborator.
        const LOAD_MINIMAL = 1 << 4;
        /// Fully-loaded referenced projects via the loader collaborator.
        const LOAD_FULL = 1 << 5;
        /// Dependency resolution via loaded referenced projects.
        const PROJECT_DEPENDENCIES = 1 << 6;
    }
}

impl ScopeItems {
    /// Everything derivable without invoking loader collaborators.
    pub fn parsed() -> Self {
        Self::PROJECTS | Self::SOLUTION_CONFIGS | Self::PROJECT_CONFIGS | Self::ENV
    }
}

impl Default for ScopeItems {
    fn default() -> Self {
        Self::parsed() | Self::PROJECT_DEPENDENCIES
    }
}
