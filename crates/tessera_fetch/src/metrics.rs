//! Fetch outcome counters.
//!
//! Available with the `metrics` feature.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Meter},
};
use std::sync::LazyLock;
use tessera_core::{FetchError, PlatformId};

static FETCH_METRICS: LazyLock<FetchMetrics> = LazyLock::new(FetchMetrics::new);

/// Per-platform fetch counters.
#[derive(Clone)]
pub struct FetchMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Platforms fetched successfully
    pub success: Counter<u64>,
    /// Platforms whose fetch failed
    pub failure: Counter<u64>,
}

impl FetchMetrics {
    /// Create the counters on the global meter provider.
    pub fn new() -> Self {
        let meter = global::meter("tessera_fetch");
        let success = meter
            .u64_counter("tessera.fetch.success")
            .with_description("Platforms fetched successfully")
            .build();
        let failure = meter
            .u64_counter("tessera.fetch.failure")
            .with_description("Platforms whose fetch failed")
            .build();
        Self {
            _meter: meter,
            success,
            failure,
        }
    }

    /// Shared instance.
    pub fn global() -> &'static FetchMetrics {
        &FETCH_METRICS
    }

    /// Count one successful fetch.
    pub fn record_success(&self, platform: &PlatformId) {
        self.success
            .add(1, &[KeyValue::new("platform", platform.to_string())]);
    }

    /// Count one failed fetch.
    pub fn record_failure(&self, error: &FetchError) {
        self.failure.add(
            1,
            &[
                KeyValue::new("platform", error.platform().to_string()),
                KeyValue::new("code", error.code().to_string()),
            ],
        );
    }
}

impl Default for FetchMetrics {
    fn default() -> Self {
        Self::new()
    }
}
