//! Per-platform fetch outcomes.

use crate::{PlatformId, PlatformSummary};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Why a single platform's analytics could not be fetched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorCode {
    /// The per-platform timeout elapsed.
    #[display("timeout")]
    Timeout,
    /// The request never produced an HTTP response.
    #[display("transport")]
    Transport,
    /// The upstream answered with a non-2xx status.
    #[display("http_status")]
    HttpStatus,
    /// The response body could not be understood.
    #[display("invalid_payload")]
    InvalidPayload,
    /// The upstream reported an error for this platform.
    #[display("upstream")]
    Upstream,
}

/// Structured failure for one platform.
///
/// Carried as data in the outcome map; never raised past the fetch stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_more::Display)]
#[display("{platform} [{code}]: {message}")]
pub struct FetchError {
    /// Platform that failed
    platform: PlatformId,
    /// Failure category
    code: FetchErrorCode,
    /// Human-readable detail
    message: String,
}

impl FetchError {
    /// Create a new fetch error.
    pub fn new(platform: PlatformId, code: FetchErrorCode, message: impl Into<String>) -> Self {
        Self {
            platform,
            code,
            message: message.into(),
        }
    }
}

/// Success-or-error result recorded for one platform in one fetch cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FetchOutcome {
    /// Analytics were fetched and mapped.
    Success {
        /// Canonical summary
        summary: PlatformSummary,
    },
    /// Analytics could not be fetched.
    Error {
        /// What went wrong
        error: FetchError,
    },
}

impl FetchOutcome {
    /// The summary, when the platform succeeded.
    pub fn summary(&self) -> Option<&PlatformSummary> {
        match self {
            FetchOutcome::Success { summary } => Some(summary),
            FetchOutcome::Error { .. } => None,
        }
    }

    /// The error, when the platform failed.
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchOutcome::Success { .. } => None,
            FetchOutcome::Error { error } => Some(error),
        }
    }

    /// True when the platform succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }
}

impl From<PlatformSummary> for FetchOutcome {
    fn from(summary: PlatformSummary) -> Self {
        FetchOutcome::Success { summary }
    }
}

impl From<FetchError> for FetchOutcome {
    fn from(error: FetchError) -> Self {
        FetchOutcome::Error { error }
    }
}
