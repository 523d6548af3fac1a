//! Outcome bookkeeping invariant errors.
//!
//! These are raised only when the fetch stage loses track of a requested
//! platform. Upstream trouble never ends up here; it is recorded per platform
//! as data instead.

/// Specific bookkeeping violations detected while assembling a response.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum InvariantErrorKind {
    /// A requested platform has no recorded outcome.
    #[display("No outcome recorded for requested platform '{_0}'")]
    MissingOutcome(String),
    /// An outcome was recorded for a platform that was never requested.
    #[display("Outcome recorded for unrequested platform '{_0}'")]
    UnexpectedOutcome(String),
    /// Platforms were requested but not a single outcome came back.
    #[display("{_0} platform(s) requested but no outcomes were recorded")]
    NoOutcomes(usize),
}

/// Invariant violation with location tracking.
///
/// # Examples
///
/// ```
/// use tessera_error::{InvariantError, InvariantErrorKind};
///
/// let err = InvariantError::new(InvariantErrorKind::MissingOutcome("facebook".into()));
/// assert!(format!("{}", err).contains("facebook"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invariant Error: {} at line {} in {}", kind, line, file)]
pub struct InvariantError {
    kind: InvariantErrorKind,
    line: u32,
    file: &'static str,
}

impl InvariantError {
    /// Create a new invariant error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InvariantErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &InvariantErrorKind {
        &self.kind
    }
}

impl From<InvariantErrorKind> for InvariantError {
    #[track_caller]
    fn from(kind: InvariantErrorKind) -> Self {
        Self::new(kind)
    }
}
