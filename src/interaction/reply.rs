//! Reply composition for the four terminal outcomes of a triggered comment.

use thiserror::Error;

use crate::base::types::{Artist, EventCalendar};

/// Display cap on event bullets in a single reply.
pub const MAX_EVENTS_SHOWN: usize = 6;

/// Errors raised while shaping event data into reply text.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// An event record could not be rendered (e.g. a date that is not
    /// `YYYY-MM-DD`-shaped). Fatal to the item; no reply is sent.
    #[error("malformed event data: {0}")]
    MalformedEventData(String),
}

/// Compose the reply for an artist with no upcoming events.
pub fn no_upcoming_events(artist: &Artist) -> String {
    format!(
        "Couldn't find any upcoming tour dates for [{}]({}). Laaaame.\n\n",
        artist.name, artist.url
    )
}

/// Compose the reply for an artist with upcoming events.
///
/// Lists at most [`MAX_EVENTS_SHOWN`] events as `MM/DD @ City` bullets, in the
/// order the service returned them (the service's sort order is unverified, so
/// this is "the first six as returned", not "the earliest six"). When the
/// service reports more events than shown, the footer says how many are
/// missing; otherwise a plain view-more footer is used.
pub fn upcoming_events(artist: &Artist, calendar: &EventCalendar) -> Result<String, ComposeError> {
    let mut reply = format!("Hey there! Here's where {} will be performing soon:", artist.name);

    for event in calendar.events.iter().take(MAX_EVENTS_SHOWN) {
        let (month, day) = split_date(&event.date)?;
        reply.push_str(&format!("\n\n* {}/{} @ {}", month, day, event.city));
    }

    let shown = MAX_EVENTS_SHOWN as u64;
    if calendar.total > shown {
        reply.push_str(&format!(
            "\n\n{} events not shown. Click [here]({}) to view or buy tickets.",
            calendar.total - shown,
            artist.url
        ));
    } else {
        reply.push_str(&format!(
            "\n\nClick [here]({}) to view more information or buy tickets.",
            artist.url
        ));
    }

    Ok(reply)
}

/// Split a `YYYY-MM-DD` date into its month and day parts.
fn split_date(date: &str) -> Result<(&str, &str), ComposeError> {
    let parts: Vec<&str> = date.split('-').collect();

    match parts.as_slice() {
        [_year, month, day] => Ok((month, day)),
        _ => Err(ComposeError::MalformedEventData(format!("unexpected start date `{date}`"))),
    }
}
