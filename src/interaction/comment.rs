//! Per-comment handling: dedup check, trigger scan, lookups, reply.

use tracing::{info, instrument};

use crate::{
    base::{config::Config, messages, types::Void},
    interaction::{
        reply,
        trigger::{self, TriggerScan},
    },
    service::{
        concerts::{ConcertClient, ConcertError},
        db::SeenStore,
        feed::{FeedClient, FeedItem},
    },
};

/// Process a single polled comment end to end.
///
/// Recoverable classifications (missing or empty payload, artist not found)
/// become canned user replies; transport and data-shape errors propagate to
/// the sweep, which logs them and abandons the item without marking it seen.
#[instrument(skip_all, fields(id = %item.id))]
pub async fn handle_comment(item: &FeedItem, config: &Config, db: &SeenStore, feed: &FeedClient, concerts: &ConcertClient) -> Void {
    // A deleted author cannot be checked against the bot account, so the
    // item is skipped without being marked seen and re-evaluated next cycle.
    let Some(author) = item.author.as_deref() else {
        info!("Post {} deleted.", item.id);
        return Ok(());
    };

    if db.has_seen(&item.id)? {
        return Ok(());
    }

    info!("Looking at post {}", item.id);

    match trigger::scan(&item.body, author, feed.bot_username(), &config.triggers) {
        TriggerScan::NotRelevant => Ok(()),
        TriggerScan::SelfAuthored => {
            info!("Will not reply to self account.");
            db.mark_seen(&item.id)
        }
        TriggerScan::MissingPayload => send_reply(messages::BAD_INPUT, item, db, feed).await,
        TriggerScan::Payload(payload) => {
            info!("Found a key match.");
            lookup_and_reply(&payload, item, db, feed, concerts).await
        }
    }
}

/// Resolve the artist and their calendar, then send the composed reply.
async fn lookup_and_reply(payload: &str, item: &FeedItem, db: &SeenStore, feed: &FeedClient, concerts: &ConcertClient) -> Void {
    let artist = match concerts.find_artist(payload).await {
        Ok(Some(artist)) => artist,
        Ok(None) => return send_reply(messages::NO_RESULTS, item, db, feed).await,
        Err(ConcertError::InvalidQuery) => return send_reply(messages::BAD_INPUT, item, db, feed).await,
        Err(err) => return Err(err.into()),
    };

    let calendar = match concerts.find_upcoming_events(&artist.id).await {
        Ok(Some(calendar)) => calendar,
        Ok(None) => return send_reply(&reply::no_upcoming_events(&artist), item, db, feed).await,
        Err(ConcertError::InvalidQuery) => return send_reply(messages::BAD_INPUT, item, db, feed).await,
        Err(err) => return Err(err.into()),
    };

    let text = reply::upcoming_events(&artist, &calendar)?;

    send_reply(&text, item, db, feed).await
}

/// Send `content` with the signature appended, then record the item as seen.
///
/// Marking happens only after a successful send, so a failed send leaves the
/// item eligible for the next cycle.
async fn send_reply(content: &str, item: &FeedItem, db: &SeenStore, feed: &FeedClient) -> Void {
    info!("Replying to {}.", item.id);

    let text = format!("{}{}", content, messages::SIGNATURE);
    feed.reply(&item.id, &text).await?;

    db.mark_seen(&item.id)
}
