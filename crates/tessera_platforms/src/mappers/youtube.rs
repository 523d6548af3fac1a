//! YouTube channel statistics.

use crate::{Fields, MetricMapper};
use tessera_core::{KnownPlatform, MetricCounts, PlatformId, RawPlatformPayload};

/// `videoCount` and `viewCount` arrive as decimal strings and are parsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct YoutubeMapper;

impl MetricMapper for YoutubeMapper {
    fn platform(&self) -> PlatformId {
        KnownPlatform::Youtube.into()
    }

    fn extract(&self, raw: &RawPlatformPayload) -> MetricCounts {
        let fields = Fields::new(raw.as_value());
        MetricCounts {
            posts: fields.parsed_count("videoCount"),
            views: fields.parsed_count("viewCount"),
            likes: fields.count("likes"),
            comments: fields.count("comments"),
            shares: fields.count("shares"),
            engagement: fields.sum(&["likes", "comments", "shares"]),
        }
    }
}
