//! Error types for the Tessera social analytics engine.
//!
//! Every error carries the file and line where it was raised. Per-platform
//! upstream failures are not errors at this level: they are recorded as data
//! in the outcome map, so only configuration, document and bookkeeping faults
//! surface through [`TesseraError`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod document;
mod invariant;

pub use config::{ConfigError, ConfigErrorKind};
pub use document::{DocumentError, DocumentErrorKind};
pub use invariant::{InvariantError, InvariantErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum TesseraErrorKind {
    /// Configuration or credential resolution failed
    #[display("{_0}")]
    Config(ConfigError),
    /// A saved JSON document could not be loaded
    #[display("{_0}")]
    Document(DocumentError),
    /// Outcome bookkeeping violated an invariant
    #[display("{_0}")]
    Invariant(InvariantError),
}

/// Tessera error with kind discrimination.
#[derive(Debug, derive_more::Display)]
#[display("Tessera Error: {_0}")]
pub struct TesseraError(Box<TesseraErrorKind>);

impl TesseraError {
    /// Create a new error from a kind.
    pub fn new(kind: TesseraErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TesseraErrorKind {
        &self.0
    }
}

impl std::error::Error for TesseraError {}

impl<T> From<T> for TesseraError
where
    T: Into<TesseraErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Tessera operations.
pub type TesseraResult<T> = std::result::Result<T, TesseraError>;
