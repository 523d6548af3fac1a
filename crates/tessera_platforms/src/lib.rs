//! Per-platform metric mappers for Tessera.
//!
//! Each supported platform has a [`MetricMapper`] that reads its raw analytics
//! payload into a [`tessera_core::PlatformSummary`]. The [`PlatformRegistry`]
//! ties platforms to their mappers and display metadata, and falls back to
//! [`GenericMapper`] for anything it does not know.
//!
//! ```
//! use tessera_core::{RawPlatformPayload, normalize};
//! use tessera_platforms::PlatformRegistry;
//!
//! let raw = RawPlatformPayload::from(serde_json::json!({ "totalKarma": 9 }));
//! let summary = PlatformRegistry::global().map(&normalize("Reddit"), &raw, chrono::Utc::now());
//! assert_eq!(*summary.total_engagement(), 9);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod extract;
mod mapper;
pub mod mappers;
mod registry;

pub use extract::Fields;
pub use mapper::MetricMapper;
pub use mappers::GenericMapper;
pub use registry::{FALLBACK_COLOR, FALLBACK_ICON, PlatformEntry, PlatformRegistry};
