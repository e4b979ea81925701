//! One poll cycle over a bounded batch of recent comments.

use tracing::{error, info, instrument};

use crate::{
    base::{config::Config, types::Void},
    interaction::comment,
    service::{concerts::ConcertClient, db::SeenStore, feed::FeedClient},
};

/// Fetch the most recent comments and process them strictly in order.
///
/// A failed item is logged and abandoned for this cycle; the rest of the
/// batch still runs. A failure of the fetch itself aborts the cycle.
#[instrument(skip_all)]
pub async fn run_sweep(config: &Config, db: &SeenStore, feed: &FeedClient, concerts: &ConcertClient) -> Void {
    info!("Searching /r/{}.", config.subreddit);

    let items = feed.recent_comments(config.max_posts).await?;

    for item in &items {
        if let Err(err) = comment::handle_comment(item, config, db, feed, concerts).await {
            error!("Error while handling `{}`: {}", item.id, err);
        }
    }

    Ok(())
}
