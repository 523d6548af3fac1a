//! Instagram business account insights.

use crate::{Fields, MetricMapper};
use tessera_core::{KnownPlatform, MetricCounts, PlatformId, RawPlatformPayload};

/// Engagement is `likeCount + commentsCount`; shares are not reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstagramMapper;

impl MetricMapper for InstagramMapper {
    fn platform(&self) -> PlatformId {
        KnownPlatform::Instagram.into()
    }

    fn extract(&self, raw: &RawPlatformPayload) -> MetricCounts {
        let fields = Fields::new(raw.as_value());
        let likes = fields.count("likeCount");
        let comments = fields.count("commentsCount");
        MetricCounts {
            posts: fields.count("mediaCount"),
            views: fields.count("viewsCount"),
            likes,
            comments,
            shares: 0,
            engagement: likes.saturating_add(comments),
        }
    }
}
