//! Runtime services and shared state for the concert-bot.

use std::time::Duration;

use tracing::{error, instrument};

use crate::{
    base::{
        config::Config,
        types::{Res, Void},
    },
    interaction::sweep,
    service::{concerts::ConcertClient, db::SeenStore, feed::FeedClient},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the seen-comment store, the feed client, the concert
/// client, and the configuration. It is designed to be trivially cloneable,
/// allowing it to be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The seen-comment store instance.
    pub db: SeenStore,
    /// The comment-feed client instance.
    pub feed: FeedClient,
    /// The concert-data client instance.
    pub concerts: ConcertClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Open the seen-comment database.
        let db = SeenStore::open(&config)?;

        // Initialize the concert-data client.
        let concerts = ConcertClient::songkick(&config);

        // Initialize the feed client (logs in to Reddit).
        let feed = FeedClient::reddit(&config).await?;

        Ok(Self { config, db, feed, concerts })
    }

    /// Run the poll loop forever: sweep, sleep, repeat.
    ///
    /// A failed sweep is logged and does not terminate the process. There is
    /// no graceful-shutdown path; termination is external, so this never
    /// returns.
    pub async fn start(&self) -> Void {
        loop {
            if let Err(err) = sweep::run_sweep(&self.config, &self.db, &self.feed, &self.concerts).await {
                error!("Sweep failed: {}", err);
            }

            tokio::time::sleep(Duration::from_secs(self.config.poll_interval_secs)).await;
        }
    }
}
