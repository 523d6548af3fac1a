//! Core data types for the Tessera social analytics engine.
//!
//! Every connected platform reports analytics in its own shape. This crate
//! defines the single canonical record those shapes are mapped into, and the
//! pure stages that surround mapping:
//!
//! - [`normalize`] - loose platform names to [`PlatformId`]
//! - [`PlatformSummary`] - canonical per-platform metrics
//! - [`FetchOutcome`] - success-or-error per platform
//! - [`aggregate`] - cross-platform rollup
//! - [`assemble`] / [`assemble_checked`] - the final [`AnalyticsResponse`]
//!
//! None of these hold state between calls.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregate;
pub mod observability;
mod outcome;
mod payload;
mod platform;
mod profile;
mod response;
mod summary;

pub use aggregate::{AggregateSummary, aggregate};
pub use outcome::{FetchError, FetchErrorCode, FetchOutcome};
pub use payload::RawPlatformPayload;
pub use platform::{
    KnownPlatform, PlatformId, UNKNOWN_PREFIX, canonicalize, normalize, parse_identifier,
};
pub use profile::{DisplayName, UserProfile};
pub use response::{
    AnalyticsResponse, NO_PLATFORMS_MESSAGE, ResponseStatus, assemble, assemble_checked,
};
pub use summary::{MetricCounts, PlatformSummary, engagement_rate};
