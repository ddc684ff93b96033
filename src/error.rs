//! Error types for solution parsing.

use thiserror::Error;

/// Errors that can occur while parsing a solution source.
#[derive(Debug, Error)]
pub enum SolutionError {
    /// Missing or empty source identifier, empty stream. Fatal in every
    /// policy mode, raised before any line is read.
    #[error("invalid invocation: {0}")]
    InvalidInvocation(String),

    /// IO error reading the source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A handler or the resolver met a construct it recognizes but cannot
    /// interpret.
    #[error("{source_name}:{line}: malformed {construct}: {text}")]
    Malformed {
        source_name: String,
        line: usize,
        construct: &'static str,
        text: String,
    },

    /// Reference to an entity absent from the parse.
    #[error("{source_name}: unresolved reference: {reference}")]
    Unresolved {
        source_name: String,
        reference: String,
    },

    /// A referenced-project loader or dependency linker failed.
    #[error("{source_name}: loader failure: {message}")]
    Loader {
        source_name: String,
        message: String,
    },
}

/// Coarse failure discriminant consumed by exception-policy predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    InvalidInvocation,
    Io,
    Malformed,
    Unresolved,
    Loader,
}

impl SolutionError {
    /// Create an invalid-invocation error.
    pub fn invalid_invocation(message: impl Into<String>) -> Self {
        Self::InvalidInvocation(message.into())
    }

    /// Create a malformed-construct error.
    pub fn malformed(
        source_name: impl Into<String>,
        line: usize,
        construct: &'static str,
        text: impl Into<String>,
    ) -> Self {
        Self::Malformed {
            source_name: source_name.into(),
            line,
            construct,
            text: text.into(),
        }
    }

    /// Create an unresolved-reference error.
    pub fn unresolved(source_name: impl Into<String>, reference: impl Into<String>) -> Self {
        Self::Unresolved {
            source_name: source_name.into(),
            reference: reference.into(),
        }
    }

    /// Create a loader error.
    pub fn loader(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Loader {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidInvocation(_) => FailureKind::InvalidInvocation,
            Self::Io(_) => FailureKind::Io,
            Self::Malformed { .. } => FailureKind::Malformed,
            Self::Unresolved { .. } => FailureKind::Unresolved,
            Self::Loader { .. } => FailureKind::Loader,
        }
    }

    /// Invocation and IO failures abort the parse regardless of policy mode.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind(),
            FailureKind::InvalidInvocation | FailureKind::Io
        )
    }
}
