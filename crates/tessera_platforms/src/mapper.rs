//! The metric mapper contract.

use chrono::{DateTime, Utc};
use tessera_core::{MetricCounts, PlatformId, PlatformSummary, RawPlatformPayload};

/// Maps one platform's raw analytics payload into a [`PlatformSummary`].
///
/// Implementations know exactly one platform's field names. Mapping is
/// infallible: missing or mistyped fields read as zero, so an empty payload
/// (`{}`) always yields an all-zero summary.
pub trait MetricMapper: Send + Sync + std::fmt::Debug {
    /// Platform this mapper reads.
    fn platform(&self) -> PlatformId;

    /// Pull the six counters out of a raw payload.
    fn extract(&self, raw: &RawPlatformPayload) -> MetricCounts;

    /// Map a payload, stamping the summary with `at`.
    fn map_at(&self, raw: &RawPlatformPayload, at: DateTime<Utc>) -> PlatformSummary {
        PlatformSummary::from_counts(self.platform(), self.extract(raw), at)
    }

    /// Map a payload, stamping the summary with the current time.
    fn map(&self, raw: &RawPlatformPayload) -> PlatformSummary {
        self.map_at(raw, Utc::now())
    }
}
