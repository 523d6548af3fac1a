//! Rows printed by the offline commands.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use tessera_core::{PlatformSummary, normalize};
use tessera_error::TesseraResult;
use tessera_platforms::PlatformRegistry;

use crate::read_payload;

/// How one input name normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct NormalizedName {
    /// Name as given
    input: String,
    /// Canonical identifier
    platform: String,
    /// Whether a dedicated mapper exists
    known: bool,
}

/// Display metadata for one registered platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct PlatformRow<'a> {
    /// Canonical identifier
    platform: String,
    /// Human-readable name
    display_name: &'a str,
    /// Emoji icon
    icon: &'a str,
    /// Text colour class
    color: &'a str,
}

/// Normalize each name, keeping input order and duplicates.
pub fn normalize_names<I, S>(names: I) -> Vec<NormalizedName>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| {
            let input = name.as_ref();
            let id = normalize(input);
            NormalizedName {
                input: input.to_string(),
                known: !id.is_unknown(),
                platform: id.to_string(),
            }
        })
        .collect()
}

/// One row per registered platform, in identifier order.
pub fn platform_rows(registry: &PlatformRegistry) -> Vec<PlatformRow<'_>> {
    registry
        .entries()
        .map(|entry| PlatformRow {
            platform: entry.platform().to_string(),
            display_name: entry.display_name(),
            icon: entry.icon(),
            color: entry.color(),
        })
        .collect()
}

/// Map a payload document for `platform`, stamped with `at`.
///
/// # Errors
///
/// Returns a document error if the payload cannot be read or parsed.
pub fn map_payload_file(
    registry: &PlatformRegistry,
    platform: &str,
    payload: &Path,
    at: DateTime<Utc>,
) -> TesseraResult<PlatformSummary> {
    let id = normalize(platform);
    let raw = read_payload(payload)?;
    Ok(registry.map(&id, &raw, at))
}
