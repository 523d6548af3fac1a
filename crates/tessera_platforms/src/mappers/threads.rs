//! Threads profile insights.

use crate::{Fields, MetricMapper};
use tessera_core::{KnownPlatform, MetricCounts, PlatformId, RawPlatformPayload};

/// Replies count as comments, reposts as shares.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadsMapper;

impl MetricMapper for ThreadsMapper {
    fn platform(&self) -> PlatformId {
        KnownPlatform::Threads.into()
    }

    fn extract(&self, raw: &RawPlatformPayload) -> MetricCounts {
        let fields = Fields::new(raw.as_value());
        MetricCounts {
            posts: 0,
            views: fields.count("views"),
            likes: fields.count("likes"),
            comments: fields.count("replies"),
            shares: fields.count("reposts"),
            engagement: fields.sum(&["likes", "replies", "reposts"]),
        }
    }
}
