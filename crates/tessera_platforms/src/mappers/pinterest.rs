//! Pinterest account analytics.

use crate::{Fields, MetricMapper};
use tessera_core::{KnownPlatform, MetricCounts, PlatformId, RawPlatformPayload};

/// Saves count as shares; the pin count lives under `board`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinterestMapper;

impl MetricMapper for PinterestMapper {
    fn platform(&self) -> PlatformId {
        KnownPlatform::Pinterest.into()
    }

    fn extract(&self, raw: &RawPlatformPayload) -> MetricCounts {
        let fields = Fields::new(raw.as_value());
        MetricCounts {
            posts: fields.count_at(&["board", "pinCount"]),
            views: fields.count("impression"),
            shares: fields.count("save"),
            engagement: fields.count("engagement"),
            ..Default::default()
        }
    }
}
