//! Facebook page insights.

use crate::{Fields, MetricMapper};
use tessera_core::{KnownPlatform, MetricCounts, PlatformId, RawPlatformPayload};

/// Reads `pageImpressions`, `fanCount` and `pagePostEngagements`.
///
/// Likes fall back to `engagement.count` when the page reports no fan count.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacebookMapper;

impl MetricMapper for FacebookMapper {
    fn platform(&self) -> PlatformId {
        KnownPlatform::Facebook.into()
    }

    fn extract(&self, raw: &RawPlatformPayload) -> MetricCounts {
        let fields = Fields::new(raw.as_value());
        let likes = match fields.count("fanCount") {
            0 => fields.count_at(&["engagement", "count"]),
            fans => fans,
        };
        MetricCounts {
            views: fields.count("pageImpressions"),
            likes,
            engagement: fields.count("pagePostEngagements"),
            ..Default::default()
        }
    }
}
