//! Concurrent raw analytics fetching for Tessera.
//!
//! [`RawAnalyticsFetcher`] issues one [`AnalyticsClient`] call per platform,
//! each under its own timeout, and waits for all of them to settle. Failures
//! are isolated per platform and come back as [`tessera_core::FetchError`]
//! values rather than as an `Err` for the whole batch.
//!
//! [`AyrshareClient`] is the production client; tests substitute their own
//! [`AnalyticsClient`] implementations.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ayrshare;
mod client;
mod credentials;
mod error;
mod fetcher;
#[cfg(feature = "metrics")]
mod metrics;
mod options;

pub use ayrshare::{AnalyticsRequest, AyrshareClient, DEFAULT_BASE_URL, platform_analytics};
pub use client::{AnalyticsClient, UpstreamResponse};
pub use credentials::Credentials;
pub use error::{ClientError, ClientErrorKind};
pub use fetcher::{DEFAULT_TIMEOUT, FetchResult, RawAnalyticsFetcher};
#[cfg(feature = "metrics")]
pub use metrics::FetchMetrics;
pub use options::{MAX_QUARTERS, QueryOptions, QueryOptionsBuilder, QueryOptionsBuilderError};
