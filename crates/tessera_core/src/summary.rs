//! Canonical per-platform metric record.

use crate::PlatformId;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The six counters a mapper extracts from one platform payload.
///
/// Fields a platform does not report stay at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MetricCounts {
    /// Number of posts, videos, pins, ...
    pub posts: u64,
    /// Views or impressions
    pub views: u64,
    /// Likes, reactions, karma
    pub likes: u64,
    /// Comments or replies
    pub comments: u64,
    /// Shares, reposts, saves
    pub shares: u64,
    /// Platform-specific engagement total
    pub engagement: u64,
}

/// Canonical summary of one platform's analytics snapshot.
///
/// `average*` fields mirror `total*`: upstream payloads describe a single
/// current snapshot with no per-post breakdown to average over.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSummary {
    /// Platform the metrics belong to
    platform: PlatformId,
    /// Total posts
    total_posts: u64,
    /// Total views
    total_views: u64,
    /// Total likes
    total_likes: u64,
    /// Total comments
    total_comments: u64,
    /// Total shares
    total_shares: u64,
    /// Total engagement
    total_engagement: u64,
    /// Average views
    average_views: u64,
    /// Average likes
    average_likes: u64,
    /// Average comments
    average_comments: u64,
    /// Average shares
    average_shares: u64,
    /// Average engagement
    average_engagement: u64,
    /// When the snapshot was mapped
    last_updated: DateTime<Utc>,
}

impl PlatformSummary {
    /// Builds a summary from extracted counters.
    pub fn from_counts(platform: PlatformId, counts: MetricCounts, at: DateTime<Utc>) -> Self {
        Self {
            platform,
            total_posts: counts.posts,
            total_views: counts.views,
            total_likes: counts.likes,
            total_comments: counts.comments,
            total_shares: counts.shares,
            total_engagement: counts.engagement,
            average_views: counts.views,
            average_likes: counts.likes,
            average_comments: counts.comments,
            average_shares: counts.shares,
            average_engagement: counts.engagement,
            last_updated: at,
        }
    }

    /// A summary with every counter at zero.
    pub fn zeroed(platform: PlatformId, at: DateTime<Utc>) -> Self {
        Self::from_counts(platform, MetricCounts::default(), at)
    }

    /// True when every numeric field is zero.
    pub fn is_zeroed(&self) -> bool {
        self.numeric_fields().iter().all(|v| *v == 0)
    }

    /// All eleven numeric fields, totals first.
    pub fn numeric_fields(&self) -> [u64; 11] {
        [
            self.total_posts,
            self.total_views,
            self.total_likes,
            self.total_comments,
            self.total_shares,
            self.total_engagement,
            self.average_views,
            self.average_likes,
            self.average_comments,
            self.average_shares,
            self.average_engagement,
        ]
    }

    /// Engagement as a percentage of views. See [`engagement_rate`].
    pub fn engagement_rate(&self) -> f64 {
        engagement_rate(self)
    }
}

/// `total_engagement / total_views * 100`, or exactly `0.0` without views.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use tessera_core::{KnownPlatform, MetricCounts, PlatformSummary, engagement_rate};
///
/// let counts = MetricCounts { views: 200, engagement: 50, ..Default::default() };
/// let summary = PlatformSummary::from_counts(KnownPlatform::Threads.into(), counts, Utc::now());
/// assert_eq!(engagement_rate(&summary), 25.0);
/// ```
pub fn engagement_rate(summary: &PlatformSummary) -> f64 {
    rate(summary.total_engagement, summary.total_views)
}

pub(crate) fn rate(engagement: u64, views: u64) -> f64 {
    if views > 0 {
        engagement as f64 / views as f64 * 100.0
    } else {
        0.0
    }
}
