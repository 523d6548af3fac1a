//! Fetch command handler.

use super::{FetchArgs, print_json};
use std::collections::BTreeSet;
use tessera::{EngineConfig, PlatformId, normalize, read_profile, run_configured};
use tracing::{debug, info};

/// Handles the fetch command.
///
/// Platforms come from `--platforms`, plus every platform connected to the
/// `--profile` document when one is given. Query flags are layered onto the
/// configuration file's `[query]` table.
#[tracing::instrument(skip_all)]
pub async fn handle_fetch(args: FetchArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => {
            info!(config_file = %path.display(), "Loading configuration");
            EngineConfig::from_file(path)?
        }
        None => EngineConfig::default(),
    };

    let mut platforms: BTreeSet<PlatformId> =
        args.platforms.iter().map(|name| normalize(name)).collect();
    if let Some(path) = &args.profile {
        let profile = read_profile(path)?;
        platforms.extend(profile.connected_platforms());
    }
    debug!(platforms = platforms.len(), "Resolved platform set");

    let options = config.query_with(args.quarters, args.daily, args.extended);
    let response = run_configured(&config, &platforms, args.profile_key, &options).await?;
    print_json(&response)
}
