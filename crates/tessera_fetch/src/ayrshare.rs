//! Ayrshare social analytics client.

use crate::{AnalyticsClient, ClientError, ClientErrorKind, Credentials, QueryOptions, UpstreamResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tessera_core::{PlatformId, RawPlatformPayload};
use tracing::{debug, error, instrument};

/// Default Ayrshare API root.
pub const DEFAULT_BASE_URL: &str = "https://api.ayrshare.com/api";

const ANALYTICS_PATH: &str = "/analytics/social";

/// Request body for `POST /analytics/social`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRequest {
    platforms: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    quarters: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    daily: Option<bool>,
    #[serde(rename = "period60Days", skip_serializing_if = "Option::is_none")]
    period_60_days: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user_name: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    instagram_details: bool,
}

impl AnalyticsRequest {
    /// Build the request body for one platform.
    pub fn new(platform: &PlatformId, options: &QueryOptions) -> Self {
        Self {
            platforms: vec![platform.to_string()],
            quarters: *options.quarters(),
            daily: *options.daily(),
            period_60_days: *options.period_60_days(),
            user_id: options.user_id().clone(),
            user_name: options.user_name().clone(),
            instagram_details: *options.include_extended(),
        }
    }
}

/// HTTP client for the Ayrshare analytics endpoint.
#[derive(Debug, Clone)]
pub struct AyrshareClient {
    client: Client,
    base_url: String,
}

impl AyrshareClient {
    /// Creates a client for `base_url` (for example [`DEFAULT_BASE_URL`]).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client reusing an existing connection pool.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        debug!(url = %base_url, "Created Ayrshare client");
        Self { client, base_url }
    }

    /// Full analytics endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), ANALYTICS_PATH)
    }
}

impl Default for AyrshareClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl AnalyticsClient for AyrshareClient {
    #[instrument(skip(self, credentials, options), fields(platform = %platform))]
    async fn fetch_platform(
        &self,
        platform: &PlatformId,
        credentials: &Credentials,
        options: &QueryOptions,
    ) -> Result<UpstreamResponse, ClientError> {
        let body = AnalyticsRequest::new(platform, options);

        let mut request = self
            .client
            .post(self.endpoint())
            .bearer_auth(credentials.api_key())
            .json(&body);
        if let Some(profile_key) = credentials.profile_key() {
            request = request.header("Profile-Key", profile_key);
        }

        let response = request.send().await.map_err(|e| {
            error!(platform = %platform, error = ?e, "HTTP request failed");
            ClientError::new(ClientErrorKind::Transport(e.to_string()))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            debug!(platform = %platform, status = %status, "Upstream returned error status");
            let payload = serde_json::from_str::<Value>(&error_text)
                .unwrap_or(Value::String(error_text));
            return Ok(UpstreamResponse::new(status.as_u16(), payload));
        }

        let document: Value = response.json().await.map_err(|e| {
            error!(platform = %platform, error = ?e, "Failed to parse response");
            ClientError::new(ClientErrorKind::Decode(format!("Failed to parse JSON: {}", e)))
        })?;

        let payload = platform_analytics(&document, platform)?;
        Ok(UpstreamResponse::new(status.as_u16(), payload))
    }
}

/// Pulls one platform's analytics out of an `/analytics/social` response.
///
/// The document is keyed by platform id; the payload is the entry's
/// `analytics` object.
///
/// # Errors
///
/// - [`ClientErrorKind::Upstream`] when the entry's `status` is `"error"`
/// - [`ClientErrorKind::Decode`] when the platform entry or its `analytics`
///   block is missing
pub fn platform_analytics(
    document: &Value,
    platform: &PlatformId,
) -> Result<RawPlatformPayload, ClientError> {
    let key = platform.to_string();
    let entry = document.get(&key).ok_or_else(|| {
        ClientError::new(ClientErrorKind::Decode(format!(
            "response has no '{}' entry",
            key
        )))
    })?;

    if entry.get("status").and_then(Value::as_str) == Some("error") {
        let message = entry
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("no detail given");
        return Err(ClientError::new(ClientErrorKind::Upstream(
            message.to_string(),
        )));
    }

    entry
        .get("analytics")
        .cloned()
        .map(RawPlatformPayload::from)
        .ok_or_else(|| {
            ClientError::new(ClientErrorKind::Decode(format!(
                "'{}' entry has no analytics block",
                key
            )))
        })
}
