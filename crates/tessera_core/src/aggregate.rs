//! Cross-platform rollups.

use crate::PlatformSummary;
use crate::summary::rate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Sums of every numeric [`PlatformSummary`] field over a set of platforms.
///
/// Derived on demand; it has no identity of its own and is never stored.
#[derive(Debug, Clone, PartialEq, Default, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    /// Number of summaries folded in
    platform_count: usize,
    /// Sum of total posts
    total_posts: u64,
    /// Sum of total views
    total_views: u64,
    /// Sum of total likes
    total_likes: u64,
    /// Sum of total comments
    total_comments: u64,
    /// Sum of total shares
    total_shares: u64,
    /// Sum of total engagement
    total_engagement: u64,
    /// Sum of average views
    average_views: u64,
    /// Sum of average likes
    average_likes: u64,
    /// Sum of average comments
    average_comments: u64,
    /// Sum of average shares
    average_shares: u64,
    /// Sum of average engagement
    average_engagement: u64,
    /// `total_engagement / total_views * 100`, zero without views
    engagement_rate: f64,
}

/// Reduces summaries into one rollup.
///
/// Pure: inputs are borrowed and left untouched, and the result depends only
/// on the multiset of summaries, not their order.
///
/// # Examples
///
/// ```
/// use tessera_core::{PlatformSummary, aggregate};
///
/// let none: [PlatformSummary; 0] = [];
/// let empty = aggregate(&none);
/// assert_eq!(*empty.total_views(), 0);
/// assert_eq!(*empty.engagement_rate(), 0.0);
/// ```
pub fn aggregate<'a, I>(summaries: I) -> AggregateSummary
where
    I: IntoIterator<Item = &'a PlatformSummary>,
{
    let mut out = AggregateSummary::default();
    for summary in summaries {
        let [
            posts,
            views,
            likes,
            comments,
            shares,
            engagement,
            avg_views,
            avg_likes,
            avg_comments,
            avg_shares,
            avg_engagement,
        ] = summary.numeric_fields();

        out.platform_count += 1;
        out.total_posts = out.total_posts.saturating_add(posts);
        out.total_views = out.total_views.saturating_add(views);
        out.total_likes = out.total_likes.saturating_add(likes);
        out.total_comments = out.total_comments.saturating_add(comments);
        out.total_shares = out.total_shares.saturating_add(shares);
        out.total_engagement = out.total_engagement.saturating_add(engagement);
        out.average_views = out.average_views.saturating_add(avg_views);
        out.average_likes = out.average_likes.saturating_add(avg_likes);
        out.average_comments = out.average_comments.saturating_add(avg_comments);
        out.average_shares = out.average_shares.saturating_add(avg_shares);
        out.average_engagement = out.average_engagement.saturating_add(avg_engagement);
    }
    out.engagement_rate = rate(out.total_engagement, out.total_views);
    out
}
