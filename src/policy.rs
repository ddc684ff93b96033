//! Strict/lenient exception handling with registrable recovery strategies.
//!
//! Every component that signals a structural failure routes it through an
//! [`ExceptionPolicy`]. Strict mode aborts the parse on the first failure.
//! Lenient mode walks an ordered registry of `(predicate, producer)` pairs;
//! the first matching predicate supplies a [`Recovery`] consumed by the caller
//! that raised the failure. When nothing matches, a neutral no-op recovery is
//! returned rather than aborting.

use tracing::warn;

use crate::error::SolutionError;

/// Whether failures abort the parse or are routed to the recovery registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicyMode {
    #[default]
    Strict,
    Lenient,
}

/// What a caller should do after a recovered failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recovery {
    /// Proceed as if nothing failed, with no substituted value.
    Proceed,
    /// Proceed with the supplied substitute, interpreted by the caller that
    /// raised the failure (a corrected config pair, a corrected line, ...).
    Substitute(String),
}

type RecoveryPredicate = Box<dyn Fn(&SolutionError) -> bool>;
type RecoveryProducer = Box<dyn Fn(&SolutionError) -> Recovery>;

/// Pluggable error handling consulted from every stage that can fail.
pub struct ExceptionPolicy {
    mode: PolicyMode,
    rules: Vec<(RecoveryPredicate, RecoveryProducer)>,
    log: Vec<SolutionError>,
}

impl ExceptionPolicy {
    pub fn new(mode: PolicyMode) -> Self {
        Self {
            mode,
            rules: Vec::new(),
            log: Vec::new(),
        }
    }

    pub fn strict() -> Self {
        Self::new(PolicyMode::Strict)
    }

    pub fn lenient() -> Self {
        Self::new(PolicyMode::Lenient)
    }

    pub fn mode(&self) -> PolicyMode {
        self.mode
    }

    /// Register a recovery strategy. Registration order is consultation
    /// order; the first matching predicate wins.
    pub fn register<P, F>(&mut self, predicate: P, producer: F)
    where
        P: Fn(&SolutionError) -> bool + 'static,
        F: Fn(&SolutionError) -> Recovery + 'static,
    {
        self.rules.push((Box::new(predicate), Box::new(producer)));
    }

    /// Route a failure. Returns `Err` when the parse must abort, `Ok` with
    /// the selected recovery otherwise. Strict mode takes precedence over any
    /// registered recovery; fatal failure kinds abort in every mode.
    pub fn handle(&mut self, error: SolutionError) -> Result<Recovery, SolutionError> {
        if error.is_fatal() || self.mode == PolicyMode::Strict {
            return Err(error);
        }
        let recovery = self
            .rules
            .iter()
            .find(|(predicate, _)| predicate(&error))
            .map(|(_, producer)| producer(&error))
            .unwrap_or(Recovery::Proceed);
        warn!(error = %error, ?recovery, "recovered from parse failure");
        self.log.push(error);
        Ok(recovery)
    }

    /// Failures recovered so far, in occurrence order.
    pub fn failures(&self) -> &[SolutionError] {
        &self.log
    }

    /// Drain the failure log into the result aggregate.
    pub fn take_failures(&mut self) -> Vec<SolutionError> {
        std::mem::take(&mut self.log)
    }
}

impl Default for ExceptionPolicy {
    fn default() -> Self {
        Self::strict()
    }
}
