//! The analytics pipeline.

use crate::EngineConfig;
use chrono::Utc;
use std::collections::BTreeSet;
use std::time::Duration;
use tessera_core::{
    AnalyticsResponse, FetchOutcome, PlatformId, UserProfile, assemble_checked, normalize,
};
use tessera_error::TesseraResult;
use tessera_fetch::{AnalyticsClient, Credentials, QueryOptions, RawAnalyticsFetcher};
use tessera_platforms::PlatformRegistry;
use tracing::{debug, info, instrument};

/// Fetches, maps and rolls up analytics for a set of platforms.
///
/// Holds no state between runs; one engine can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine<C> {
    fetcher: RawAnalyticsFetcher<C>,
    registry: &'static PlatformRegistry,
}

impl<C: AnalyticsClient> AnalyticsEngine<C> {
    /// Creates an engine over `client` using the standard registry.
    pub fn new(client: C) -> Self {
        Self {
            fetcher: RawAnalyticsFetcher::new(client),
            registry: PlatformRegistry::global(),
        }
    }

    /// Sets the per-platform fetch timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.fetcher = self.fetcher.with_timeout(timeout);
        self
    }

    /// Uses a different platform registry.
    pub fn with_registry(mut self, registry: &'static PlatformRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The fetch stage.
    pub fn fetcher(&self) -> &RawAnalyticsFetcher<C> {
        &self.fetcher
    }

    /// The platform registry in use.
    pub fn registry(&self) -> &'static PlatformRegistry {
        self.registry
    }

    /// Runs the pipeline for canonical platform identifiers.
    ///
    /// With no platforms the empty-state response comes back immediately and
    /// nothing is fetched. Otherwise every platform ends up in the outcome map,
    /// as a summary or as an error.
    ///
    /// # Errors
    ///
    /// Fails only if the fetch stage lost track of a requested platform.
    #[instrument(skip_all, fields(platforms = platforms.len()))]
    pub async fn run(
        &self,
        platforms: &BTreeSet<PlatformId>,
        credentials: &Credentials,
        options: &QueryOptions,
    ) -> TesseraResult<AnalyticsResponse> {
        if platforms.is_empty() {
            info!("No connected platforms");
            return Ok(AnalyticsResponse::empty());
        }

        let fetched = self.fetcher.fetch_all(platforms, credentials, options).await;
        let at = Utc::now();
        let outcomes = fetched
            .into_iter()
            .map(|(platform, result)| {
                let outcome = match result {
                    Ok(raw) => FetchOutcome::from(self.registry.map(&platform, &raw, at)),
                    Err(error) => FetchOutcome::from(error),
                };
                (platform, outcome)
            })
            .collect();
        debug!("Mapped fetched payloads");

        let response = assemble_checked(platforms, outcomes)?;
        info!(
            status = %response.status(),
            succeeded = *response.aggregate().platform_count(),
            failed = response.errors().count(),
            "Analytics pipeline complete"
        );
        Ok(response)
    }

    /// Runs the pipeline for loose platform names, normalizing them first.
    ///
    /// Duplicate spellings of one platform are fetched once.
    ///
    /// # Errors
    ///
    /// See [`AnalyticsEngine::run`].
    pub async fn run_names<I, S>(
        &self,
        names: I,
        credentials: &Credentials,
        options: &QueryOptions,
    ) -> TesseraResult<AnalyticsResponse>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let platforms: BTreeSet<PlatformId> =
            names.into_iter().map(|name| normalize(name.as_ref())).collect();
        self.run(&platforms, credentials, options).await
    }

    /// Runs the pipeline for every platform connected to `profile`.
    ///
    /// # Errors
    ///
    /// See [`AnalyticsEngine::run`].
    pub async fn run_for_profile(
        &self,
        profile: &UserProfile,
        credentials: &Credentials,
        options: &QueryOptions,
    ) -> TesseraResult<AnalyticsResponse> {
        let platforms: BTreeSet<PlatformId> = profile.connected_platforms().into_iter().collect();
        debug!(connected = platforms.len(), "Resolved connected platforms");
        self.run(&platforms, credentials, options).await
    }
}

/// Runs the pipeline against the upstream described by `config`.
///
/// An empty platform set returns the empty-state response before any
/// credentials are resolved, so it needs no API key.
///
/// # Errors
///
/// Returns a configuration error if credentials are missing or the HTTP
/// client cannot be built, and otherwise see [`AnalyticsEngine::run`].
#[instrument(skip_all, fields(platforms = platforms.len()))]
pub async fn run_configured(
    config: &EngineConfig,
    platforms: &BTreeSet<PlatformId>,
    profile_key: Option<String>,
    options: &QueryOptions,
) -> TesseraResult<AnalyticsResponse> {
    if platforms.is_empty() {
        info!("No connected platforms");
        return Ok(AnalyticsResponse::empty());
    }
    let credentials = config.credentials(profile_key)?;
    let engine = AnalyticsEngine::new(config.client()?).with_timeout(config.timeout());
    engine.run(platforms, &credentials, options).await
}
