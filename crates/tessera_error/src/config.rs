//! Engine configuration errors.

/// What went wrong while loading configuration or resolving credentials.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConfigErrorKind {
    /// The configuration file could not be read.
    #[display("Failed to read {path}: {reason}")]
    Read {
        /// File path
        path: String,
        /// I/O failure
        reason: String,
    },
    /// The configuration file is not valid TOML for the engine schema.
    #[display("Invalid configuration: {_0}")]
    Parse(String),
    /// A required environment variable is unset or blank.
    #[display("{_0} environment variable not set")]
    MissingEnv(String),
    /// The HTTP connection pool could not be created.
    #[display("Failed to build HTTP client: {_0}")]
    HttpClient(String),
    /// The metrics exporter could not be created.
    #[display("Failed to create metrics exporter: {_0}")]
    Exporter(String),
}

/// Configuration error with location tracking.
///
/// # Examples
///
/// ```
/// use tessera_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::MissingEnv("AYRSHARE_API_KEY".into()));
/// assert!(err.to_string().contains("AYRSHARE_API_KEY environment variable not set"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    line: u32,
    file: &'static str,
}

impl ConfigError {
    /// Create a new configuration error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}

impl From<ConfigErrorKind> for ConfigError {
    #[track_caller]
    fn from(kind: ConfigErrorKind) -> Self {
        Self::new(kind)
    }
}
