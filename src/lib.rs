//! Library root for `concert-bot`.
//!
//! Concert-bot is a Reddit bot that scans a subreddit for mentions and
//! delivers information on upcoming concerts:
//! - Watches recent comments for configured trigger substrings
//! - Extracts a quoted artist name from a triggering comment
//! - Looks up the artist and their tour calendar on Songkick
//! - Replies with a bounded, formatted list of dates
//!
//! The bot integrates with Reddit for the comment feed, Songkick for concert
//! data, and sqlite for remembering which comments it has already answered.
//! The architecture is built around extensible traits that allow for
//! different implementations of each service.

#[deny(missing_docs)]
pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the concert-bot runtime:
/// - Opens the seen-comment database
/// - Logs in to Reddit and constructs the Songkick client
/// - Starts the poll loop
pub async fn start(config: Config) -> Void {
    info!("Starting concert-bot ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start the poll loop; it only returns by process termination.
    runtime.start().await
}
