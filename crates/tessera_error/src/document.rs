//! Saved JSON document errors (raw payloads, user profiles).

/// Why a saved document could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DocumentErrorKind {
    /// The file could not be read.
    #[display("Failed to read {path}: {reason}")]
    Read {
        /// File path
        path: String,
        /// I/O failure
        reason: String,
    },
    /// The file is not valid JSON for the expected document.
    #[display("Invalid JSON in {path}: {reason}")]
    Parse {
        /// File path
        path: String,
        /// Parser message
        reason: String,
    },
}

/// Document error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Document Error: {} at line {} in {}", kind, line, file)]
pub struct DocumentError {
    kind: DocumentErrorKind,
    line: u32,
    file: &'static str,
}

impl DocumentError {
    /// Create a new document error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DocumentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DocumentErrorKind {
        &self.kind
    }
}

impl From<DocumentErrorKind> for DocumentError {
    #[track_caller]
    fn from(kind: DocumentErrorKind) -> Self {
        Self::new(kind)
    }
}
