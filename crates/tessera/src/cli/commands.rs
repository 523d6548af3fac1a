//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Social analytics normalization and aggregation.
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(about = "Fetch, normalize and roll up social platform analytics")]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical identifier for each platform name
    Normalize {
        /// Platform names in any spelling
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Map a saved raw payload into a platform summary
    Map {
        /// Platform the payload came from
        #[arg(short, long)]
        platform: String,

        /// Path to the raw payload JSON
        #[arg(long)]
        payload: PathBuf,
    },

    /// Fetch analytics and print the assembled response
    Fetch(FetchArgs),

    /// List supported platforms
    Platforms,
}

/// Arguments for the fetch command.
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Comma-separated platform names
    #[arg(long, value_delimiter = ',')]
    pub platforms: Vec<String>,

    /// User-profile JSON to take connected platforms from
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Path to engine configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Per-user profile key (falls back to AYRSHARE_PROFILE_KEY)
    #[arg(long)]
    pub profile_key: Option<String>,

    /// Report on the trailing N quarters (1-4)
    #[arg(long)]
    pub quarters: Option<u8>,

    /// Request a daily breakdown
    #[arg(long)]
    pub daily: bool,

    /// Request extended details where supported
    #[arg(long)]
    pub extended: bool,
}
