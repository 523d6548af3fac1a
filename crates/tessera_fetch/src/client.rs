//! The outbound upstream contract.

use crate::{ClientError, Credentials, QueryOptions};
use async_trait::async_trait;
use serde_json::Value;
use tessera_core::{PlatformId, RawPlatformPayload};

/// Payload and HTTP status returned by one upstream call.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct UpstreamResponse {
    /// HTTP status code
    status: u16,
    /// Platform payload (or the error body for non-2xx statuses)
    payload: RawPlatformPayload,
}

impl UpstreamResponse {
    /// Create a response.
    pub fn new(status: u16, payload: impl Into<RawPlatformPayload>) -> Self {
        Self {
            status,
            payload: payload.into(),
        }
    }

    /// A `200 OK` response.
    pub fn ok(payload: impl Into<RawPlatformPayload>) -> Self {
        Self::new(200, payload)
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Consume the response, keeping the payload.
    pub fn into_payload(self) -> RawPlatformPayload {
        self.payload
    }

    /// Best-effort error detail from a non-2xx body.
    pub fn error_detail(&self) -> Option<&str> {
        let body = self.payload.as_value();
        match body {
            Value::String(text) if !text.is_empty() => Some(text),
            _ => body.get("message").and_then(Value::as_str),
        }
    }
}

/// One analytics call per platform.
///
/// Each call must be independently awaitable and must be safe to drop
/// mid-flight. A call yields either a response or an error, never both.
#[async_trait]
pub trait AnalyticsClient: Send + Sync {
    /// Fetch raw analytics for a single platform.
    async fn fetch_platform(
        &self,
        platform: &PlatformId,
        credentials: &Credentials,
        options: &QueryOptions,
    ) -> Result<UpstreamResponse, ClientError>;
}

#[async_trait]
impl<T: AnalyticsClient + ?Sized> AnalyticsClient for std::sync::Arc<T> {
    async fn fetch_platform(
        &self,
        platform: &PlatformId,
        credentials: &Credentials,
        options: &QueryOptions,
    ) -> Result<UpstreamResponse, ClientError> {
        (**self).fetch_platform(platform, credentials, options).await
    }
}
