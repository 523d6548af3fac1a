//! Concurrent per-platform fetching.

use crate::{AnalyticsClient, Credentials, QueryOptions, UpstreamResponse};
use futures::future::join_all;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;
use tessera_core::{FetchError, FetchErrorCode, PlatformId, RawPlatformPayload};
use tracing::{debug, instrument, warn};

/// Per-platform timeout used unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of fetching one platform.
pub type FetchResult = Result<RawPlatformPayload, FetchError>;

/// Fetches raw analytics for a set of platforms concurrently.
///
/// Every platform gets its own call and its own timeout. A failure for one
/// platform is recorded as a [`FetchError`] for that platform only and
/// never cancels its siblings. Dropping the future returned by
/// [`RawAnalyticsFetcher::fetch_all`] abandons every call still in flight.
#[derive(Debug, Clone)]
pub struct RawAnalyticsFetcher<C> {
    client: C,
    timeout: Duration,
}

impl<C: AnalyticsClient> RawAnalyticsFetcher<C> {
    /// Creates a fetcher with [`DEFAULT_TIMEOUT`].
    pub fn new(client: C) -> Self {
        Self {
            client,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the per-platform timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The underlying upstream client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Per-platform timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches every platform in `platforms`, one call each, all at once.
    ///
    /// The returned map has exactly one entry per requested platform. An empty
    /// set returns an empty map without touching the network. Unknown
    /// platforms are not sent upstream; they get an empty payload so the
    /// generic mapper can still report them.
    #[instrument(skip_all, fields(platforms = platforms.len(), timeout_ms = self.timeout.as_millis() as u64))]
    pub async fn fetch_all(
        &self,
        platforms: &BTreeSet<PlatformId>,
        credentials: &Credentials,
        options: &QueryOptions,
    ) -> BTreeMap<PlatformId, FetchResult> {
        if platforms.is_empty() {
            debug!("No platforms requested, skipping fetch");
            return BTreeMap::new();
        }

        let fetches = platforms.iter().map(|platform| async move {
            let result = self.fetch_one(platform, credentials, options).await;
            (platform.clone(), result)
        });
        let results: BTreeMap<PlatformId, FetchResult> = join_all(fetches).await.into_iter().collect();

        let failed = results.values().filter(|r| r.is_err()).count();
        debug!(
            succeeded = results.len() - failed,
            failed, "All platform fetches settled"
        );
        results
    }

    async fn fetch_one(
        &self,
        platform: &PlatformId,
        credentials: &Credentials,
        options: &QueryOptions,
    ) -> FetchResult {
        if platform.is_unknown() {
            debug!(platform = %platform, "Unknown platform, not fetching");
            return Ok(RawPlatformPayload::empty());
        }

        let call = self.client.fetch_platform(platform, credentials, options);
        let result = match tokio::time::timeout(self.timeout, call).await {
            Err(_) => Err(FetchError::new(
                platform.clone(),
                FetchErrorCode::Timeout,
                format!("No response within {}ms", self.timeout.as_millis()),
            )),
            Ok(Err(e)) => Err(e.into_fetch_error(platform.clone())),
            Ok(Ok(response)) => check_status(platform, response),
        };

        match &result {
            Ok(_) => {
                debug!(platform = %platform, "Platform fetch succeeded");
                #[cfg(feature = "metrics")]
                crate::FetchMetrics::global().record_success(platform);
            }
            Err(e) => {
                warn!(platform = %platform, code = %e.code(), error = %e.message(), "Platform fetch failed");
                #[cfg(feature = "metrics")]
                crate::FetchMetrics::global().record_failure(e);
            }
        }
        result
    }
}

fn check_status(platform: &PlatformId, response: UpstreamResponse) -> FetchResult {
    if response.is_success() {
        return Ok(response.into_payload());
    }
    let message = match response.error_detail() {
        Some(detail) => format!("HTTP {}: {}", response.status(), detail),
        None => format!("HTTP {}", response.status()),
    };
    Err(FetchError::new(
        platform.clone(),
        FetchErrorCode::HttpStatus,
        message,
    ))
}
