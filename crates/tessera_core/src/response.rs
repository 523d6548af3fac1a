//! Response assembly.
//!
//! Folds a complete outcome map into the structure handed to the UI layer:
//! every platform's outcome, a rollup over the successful subset, and an
//! overall status. Partial success is still `success`.

use crate::{AggregateSummary, FetchError, FetchOutcome, PlatformId, PlatformSummary, aggregate};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tessera_error::{InvariantError, InvariantErrorKind};
use tracing::{debug, instrument};

/// Message attached to the empty-state response.
pub const NO_PLATFORMS_MESSAGE: &str = "No connected social platforms found";

/// Overall response status.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// At least one platform produced a summary.
    #[display("success")]
    Success,
    /// No platform produced a summary.
    #[display("error")]
    Error,
}

/// Final analytics response.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    /// Overall status
    status: ResponseStatus,
    /// One outcome per requested platform
    outcomes: BTreeMap<PlatformId, FetchOutcome>,
    /// Rollup over successful platforms only
    aggregate: AggregateSummary,
    /// Optional note for the UI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl AnalyticsResponse {
    /// Response for a user with no connected platforms.
    pub fn empty() -> Self {
        Self {
            status: ResponseStatus::Success,
            outcomes: BTreeMap::new(),
            aggregate: AggregateSummary::default(),
            message: Some(NO_PLATFORMS_MESSAGE.to_string()),
        }
    }

    /// Summaries of platforms that succeeded, in identifier order.
    pub fn summaries(&self) -> impl Iterator<Item = &PlatformSummary> {
        self.outcomes.values().filter_map(FetchOutcome::summary)
    }

    /// Errors of platforms that failed, in identifier order.
    pub fn errors(&self) -> impl Iterator<Item = &FetchError> {
        self.outcomes.values().filter_map(FetchOutcome::error)
    }

    /// Outcome recorded for one platform.
    pub fn outcome(&self, platform: &PlatformId) -> Option<&FetchOutcome> {
        self.outcomes.get(platform)
    }
}

/// Assembles a response from a complete outcome map.
///
/// The result depends only on the map's contents, never on the order in
/// which the underlying fetches completed. An empty map yields
/// [`ResponseStatus::Error`]; callers with nothing to request should use
/// [`AnalyticsResponse::empty`] instead.
#[instrument(skip_all, fields(outcomes = outcomes.len()))]
pub fn assemble(outcomes: BTreeMap<PlatformId, FetchOutcome>) -> AnalyticsResponse {
    let aggregate = aggregate(outcomes.values().filter_map(FetchOutcome::summary));
    let status = if *aggregate.platform_count() > 0 {
        ResponseStatus::Success
    } else {
        ResponseStatus::Error
    };

    debug!(
        succeeded = *aggregate.platform_count(),
        failed = outcomes.len() - *aggregate.platform_count(),
        %status,
        "Assembled analytics response"
    );

    AnalyticsResponse {
        status,
        outcomes,
        aggregate,
        message: None,
    }
}

/// Assembles a response after checking that `outcomes` covers exactly the
/// `requested` platforms.
///
/// # Errors
///
/// Returns an [`InvariantError`] when a requested platform has no outcome,
/// an outcome exists for a platform that was not requested, or platforms
/// were requested and no outcome was recorded at all.
pub fn assemble_checked(
    requested: &BTreeSet<PlatformId>,
    outcomes: BTreeMap<PlatformId, FetchOutcome>,
) -> Result<AnalyticsResponse, InvariantError> {
    if !requested.is_empty() && outcomes.is_empty() {
        return Err(InvariantError::new(InvariantErrorKind::NoOutcomes(
            requested.len(),
        )));
    }
    if let Some(missing) = requested.iter().find(|p| !outcomes.contains_key(*p)) {
        return Err(InvariantError::new(InvariantErrorKind::MissingOutcome(
            missing.to_string(),
        )));
    }
    if let Some(extra) = outcomes.keys().find(|p| !requested.contains(*p)) {
        return Err(InvariantError::new(InvariantErrorKind::UnexpectedOutcome(
            extra.to_string(),
        )));
    }
    Ok(assemble(outcomes))
}
