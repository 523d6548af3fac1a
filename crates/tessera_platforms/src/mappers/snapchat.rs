//! Snapchat profile insights.

use crate::{Fields, MetricMapper};
use tessera_core::{KnownPlatform, MetricCounts, PlatformId, RawPlatformPayload};

/// The payload may be a list of insight records; only the first is read.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnapchatMapper;

impl MetricMapper for SnapchatMapper {
    fn platform(&self) -> PlatformId {
        KnownPlatform::Snapchat.into()
    }

    fn extract(&self, raw: &RawPlatformPayload) -> MetricCounts {
        let fields = Fields::first_of(raw.as_value());
        MetricCounts {
            views: fields.count("views"),
            shares: fields.count("shares"),
            engagement: fields.count("interactions"),
            ..Default::default()
        }
    }
}
