//! Commands that never touch the network.

use super::print_json;
use chrono::Utc;
use std::path::Path;
use tessera::{PlatformRegistry, map_payload_file, normalize_names, platform_rows};

/// Handles the normalize command.
#[tracing::instrument(skip_all, fields(count = names.len()))]
pub fn handle_normalize(names: &[String]) -> anyhow::Result<()> {
    print_json(&normalize_names(names))
}

/// Handles the map command.
#[tracing::instrument(skip_all, fields(platform = %platform, payload = %payload.display()))]
pub fn handle_map(platform: &str, payload: &Path) -> anyhow::Result<()> {
    let summary = map_payload_file(PlatformRegistry::global(), platform, payload, Utc::now())?;
    tracing::info!(platform = %summary.platform(), "Mapped payload");
    print_json(&summary)
}

/// Handles the platforms command.
#[tracing::instrument]
pub fn handle_platforms() -> anyhow::Result<()> {
    print_json(&platform_rows(PlatformRegistry::global()))
}
