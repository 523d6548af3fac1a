//! Reddit account karma.

use crate::{Fields, MetricMapper};
use tessera_core::{KnownPlatform, MetricCounts, PlatformId, RawPlatformPayload};

/// Karma is the only signal, counted as both likes and engagement.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedditMapper;

impl MetricMapper for RedditMapper {
    fn platform(&self) -> PlatformId {
        KnownPlatform::Reddit.into()
    }

    fn extract(&self, raw: &RawPlatformPayload) -> MetricCounts {
        let karma = Fields::new(raw.as_value()).count("totalKarma");
        MetricCounts {
            likes: karma,
            engagement: karma,
            ..Default::default()
        }
    }
}
