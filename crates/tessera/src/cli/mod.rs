//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the tessera binary.

mod commands;
mod fetch;
mod offline;

pub use commands::{Cli, Commands, FetchArgs};
pub use fetch::handle_fetch;
pub use offline::{handle_map, handle_normalize, handle_platforms};

/// Print a value as pretty JSON on stdout.
fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
