//! Bluesky profile counters.

use crate::{Fields, MetricMapper};
use tessera_core::{KnownPlatform, MetricCounts, PlatformId, RawPlatformPayload};

/// Only the post count is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlueskyMapper;

impl MetricMapper for BlueskyMapper {
    fn platform(&self) -> PlatformId {
        KnownPlatform::Bluesky.into()
    }

    fn extract(&self, raw: &RawPlatformPayload) -> MetricCounts {
        MetricCounts {
            posts: Fields::new(raw.as_value()).count("postsCount"),
            ..Default::default()
        }
    }
}
