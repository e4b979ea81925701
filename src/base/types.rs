//! Common result aliases and the domain value objects.

use serde::{Deserialize, Serialize};

/// The error type used throughout the application.
pub type Err = anyhow::Error;
/// Result alias over [`Err`].
pub type Res<T> = Result<T, Err>;
/// Result alias for operations that return nothing on success.
pub type Void = Res<()>;

/// An artist as resolved from the concert service.
///
/// Built from the first entry of a search result; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artist {
    /// The artist's display name.
    pub name: String,
    /// The artist's id on the concert service.
    pub id: String,
    /// URL of the artist's page on the concert service.
    pub url: String,
}

/// An artist's upcoming-event calendar as reported by the concert service.
///
/// `events` is in source order; the service does not guarantee chronological
/// order, so downstream code must not assume it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventCalendar {
    /// Total entries the service reports; may exceed `events.len()`.
    pub total: u64,
    /// The events returned in the first page, in source order.
    pub events: Vec<Event>,
}

/// A single upcoming event.
///
/// The wire record carries much more; only the start date and the city are
/// ever consumed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    /// Start date, `YYYY-MM-DD`-shaped.
    pub date: String,
    /// City of the venue.
    pub city: String,
}
