//! Fallback mapper for platforms without a dedicated one.

use crate::MetricMapper;
use tessera_core::{MetricCounts, PlatformId, RawPlatformPayload};

/// Zeroes every counter, keeping only the platform and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericMapper {
    platform: PlatformId,
}

impl GenericMapper {
    /// Create a generic mapper for `platform`.
    pub fn new(platform: PlatformId) -> Self {
        Self { platform }
    }
}

impl MetricMapper for GenericMapper {
    fn platform(&self) -> PlatformId {
        self.platform.clone()
    }

    fn extract(&self, _raw: &RawPlatformPayload) -> MetricCounts {
        MetricCounts::default()
    }
}
