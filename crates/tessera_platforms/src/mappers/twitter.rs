//! Twitter / X account metrics.

use crate::{Fields, MetricMapper};
use tessera_core::{KnownPlatform, MetricCounts, PlatformId, RawPlatformPayload};

/// Only tweet and like counts are available; views stay at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwitterMapper;

impl MetricMapper for TwitterMapper {
    fn platform(&self) -> PlatformId {
        KnownPlatform::Twitter.into()
    }

    fn extract(&self, raw: &RawPlatformPayload) -> MetricCounts {
        let fields = Fields::new(raw.as_value());
        let likes = fields.count("likeCount");
        MetricCounts {
            posts: fields.count("tweetCount"),
            likes,
            engagement: likes,
            ..Default::default()
        }
    }
}
