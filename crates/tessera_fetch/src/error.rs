//! Upstream client errors.

use tessera_core::{FetchError, FetchErrorCode, PlatformId};

/// Ways a single upstream call can fail before yielding a payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ClientErrorKind {
    /// The request never produced an HTTP response.
    #[display("Request failed: {_0}")]
    Transport(String),
    /// The response body was not the expected shape.
    #[display("Malformed response body: {_0}")]
    Decode(String),
    /// The upstream answered but flagged this platform as failed.
    #[display("Upstream reported an error: {_0}")]
    Upstream(String),
}

impl ClientErrorKind {
    /// Fetch error code recorded in the outcome map for this kind.
    pub fn code(&self) -> FetchErrorCode {
        match self {
            ClientErrorKind::Transport(_) => FetchErrorCode::Transport,
            ClientErrorKind::Decode(_) => FetchErrorCode::InvalidPayload,
            ClientErrorKind::Upstream(_) => FetchErrorCode::Upstream,
        }
    }
}

/// Upstream client error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Client Error: {} at line {} in {}", kind, line, file)]
pub struct ClientError {
    kind: ClientErrorKind,
    line: u32,
    file: &'static str,
}

impl ClientError {
    /// Create a new client error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ClientErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ClientErrorKind {
        &self.kind
    }

    /// Record this failure against `platform`.
    pub fn into_fetch_error(self, platform: PlatformId) -> FetchError {
        FetchError::new(platform, self.kind.code(), self.kind.to_string())
    }
}

impl From<ClientErrorKind> for ClientError {
    #[track_caller]
    fn from(kind: ClientErrorKind) -> Self {
        Self::new(kind)
    }
}
