// Rust 1.92 compiler bug: false positives for thiserror/miette derive macro fields
// https://github.com/rust-lang/rust/issues/147648
#![allow(unused_assignments)]

//! figsync - Figma icon pages to React components
//!
//! The binary wires three pieces together:
//!
//! - [`cli`] parses options and picks a preset (`icons`, `emojis`) or explicit
//!   `sync` settings
//! - [`pipeline`] runs the sync against a [`DesignSource`](figsync_figma::DesignSource)
//! - [`tracing`] sets up structured logging on stderr

/// CLI argument parsing and exit codes.
pub mod cli;
/// Sync orchestration and rollback.
pub mod pipeline;
/// Tracing subscriber setup.
pub mod tracing;

pub use cli::{Cli, CliError};
pub use pipeline::{SyncOptions, SyncOutcome, SyncState, run};

use figsync_figma::FigmaClient;

/// Execute a parsed command line and return the process exit code.
///
/// # Errors
///
/// Returns [`CliError`] for configuration problems detected before the sync
/// starts. Sync failures are not errors; they map to an exit code.
pub async fn execute(cli: &Cli) -> Result<i32, CliError> {
    let client = FigmaClient::new(cli.figma_config()?)?;
    let options = cli.command.sync_options();
    let outcome = run(&client, &options).await;
    Ok(cli::exit_code_for_outcome(&outcome, cli.fail_on_error))
}
