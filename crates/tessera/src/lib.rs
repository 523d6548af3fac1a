//! Tessera: social analytics normalization and aggregation.
//!
//! Connected social platforms each report analytics in their own shape.
//! [`AnalyticsEngine`] fetches every platform concurrently, maps each payload
//! into a canonical [`PlatformSummary`], and rolls the successes up into one
//! [`AnalyticsResponse`]. A platform that fails shows up as an error entry
//! without spoiling the rest.
//!
//! # Example
//!
//! ```no_run
//! use tessera::{AnalyticsEngine, EngineConfig};
//!
//! # async fn demo() -> tessera::TesseraResult<()> {
//! let config = EngineConfig::default();
//! let engine = AnalyticsEngine::new(config.client()?).with_timeout(config.timeout());
//! let credentials = config.credentials(None)?;
//!
//! let response = engine
//!     .run_names(["Instagram", "Google My Business"], &credentials, &config.query)
//!     .await?;
//! println!("{}", response.aggregate().total_views());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod config;
mod documents;
mod engine;

pub use catalog::{NormalizedName, PlatformRow, map_payload_file, normalize_names, platform_rows};
pub use config::{EngineConfig, PROFILE_KEY_ENV, UpstreamSettings};
pub use documents::{read_payload, read_profile};
pub use engine::{AnalyticsEngine, run_configured};

pub use tessera_core::{
    AggregateSummary, AnalyticsResponse, FetchError, FetchErrorCode, FetchOutcome, KnownPlatform,
    PlatformId, PlatformSummary, RawPlatformPayload, ResponseStatus, UserProfile, aggregate,
    engagement_rate, normalize,
};
pub use tessera_error::{TesseraError, TesseraErrorKind, TesseraResult};
pub use tessera_fetch::{AnalyticsClient, AyrshareClient, Credentials, QueryOptions};
pub use tessera_platforms::{MetricMapper, PlatformRegistry};
