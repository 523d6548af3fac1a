//! LinkedIn organization statistics.

use crate::{Fields, MetricMapper};
use tessera_core::{KnownPlatform, MetricCounts, PlatformId, RawPlatformPayload};

/// Engagement is likes + comments + shares.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedinMapper;

impl MetricMapper for LinkedinMapper {
    fn platform(&self) -> PlatformId {
        KnownPlatform::Linkedin.into()
    }

    fn extract(&self, raw: &RawPlatformPayload) -> MetricCounts {
        let fields = Fields::new(raw.as_value());
        MetricCounts {
            posts: 0,
            views: fields.count("impressionCount"),
            likes: fields.count("likeCount"),
            comments: fields.count("commentCount"),
            shares: fields.count("shareCount"),
            engagement: fields.sum(&["likeCount", "commentCount", "shareCount"]),
        }
    }
}
