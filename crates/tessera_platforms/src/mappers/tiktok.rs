//! TikTok account totals.

use crate::{Fields, MetricMapper};
use tessera_core::{KnownPlatform, MetricCounts, PlatformId, RawPlatformPayload};

/// Reads the `*Total` counters reported for the account.
#[derive(Debug, Clone, Copy, Default)]
pub struct TiktokMapper;

impl MetricMapper for TiktokMapper {
    fn platform(&self) -> PlatformId {
        KnownPlatform::Tiktok.into()
    }

    fn extract(&self, raw: &RawPlatformPayload) -> MetricCounts {
        let fields = Fields::new(raw.as_value());
        MetricCounts {
            posts: fields.count("videoCountTotal"),
            views: fields.count("viewCountTotal"),
            likes: fields.count("likeCountTotal"),
            comments: fields.count("commentCountTotal"),
            shares: fields.count("shareCountTotal"),
            engagement: fields.sum(&["likeCountTotal", "commentCountTotal", "shareCountTotal"]),
        }
    }
}
