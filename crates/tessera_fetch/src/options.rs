//! Query options forwarded with every upstream call.

use serde::{Deserialize, Serialize};

/// Highest number of quarters the upstream reports on.
pub const MAX_QUARTERS: u8 = 4;

/// Optional knobs for an analytics query.
///
/// Deserializes from the `[query]` table of the engine configuration.
///
/// # Examples
///
/// ```
/// use tessera_fetch::{QueryOptions, QueryOptionsBuilder};
///
/// let options = QueryOptionsBuilder::default()
///     .daily(true)
///     .include_extended(true)
///     .build()
///     .unwrap();
/// assert_eq!(*options.daily(), Some(true));
/// assert_eq!(QueryOptions::quarterly(9).quarters(), &Some(4));
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default)]
#[serde(default)]
pub struct QueryOptions {
    /// Number of trailing quarters to report (1-4)
    #[builder(setter(into, strip_option))]
    quarters: Option<u8>,
    /// Daily breakdown
    #[builder(setter(into, strip_option))]
    daily: Option<bool>,
    /// Trailing sixty-day window
    #[builder(setter(into, strip_option))]
    period_60_days: Option<bool>,
    /// Twitter user id to report on instead of the linked account
    #[builder(setter(into, strip_option))]
    user_id: Option<String>,
    /// Twitter user name to report on instead of the linked account
    #[builder(setter(into, strip_option))]
    user_name: Option<String>,
    /// Request extended details where the platform supports them
    #[builder(setter(into))]
    include_extended: bool,
}

impl QueryOptions {
    /// Daily breakdown.
    pub fn daily_breakdown() -> Self {
        Self::default().with_daily(true)
    }

    /// Trailing `quarters` quarters, clamped to `1..=4`.
    pub fn quarterly(quarters: u8) -> Self {
        Self::default().with_quarters(quarters)
    }

    /// Trailing sixty days.
    pub fn sixty_days() -> Self {
        Self {
            period_60_days: Some(true),
            ..Self::default()
        }
    }

    /// Report on another Twitter account.
    pub fn twitter_user(user_id: impl Into<String>, user_name: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            user_name: Some(user_name.into()),
            ..Self::default()
        }
    }

    /// Copy reporting on the trailing `quarters` quarters, clamped to `1..=4`.
    /// Other settings are kept.
    pub fn with_quarters(mut self, quarters: u8) -> Self {
        self.quarters = Some(quarters.clamp(1, MAX_QUARTERS));
        self
    }

    /// Copy with the daily breakdown switched on or off.
    pub fn with_daily(mut self, daily: bool) -> Self {
        self.daily = Some(daily);
        self
    }

    /// Copy with extended details switched on or off.
    pub fn with_extended(mut self, include_extended: bool) -> Self {
        self.include_extended = include_extended;
        self
    }
}
