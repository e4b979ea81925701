//! Wrapper around concert-listing clients.

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, instrument};

use crate::base::{
    config::Config,
    types::{Artist, Event, EventCalendar},
};

// Errors.

/// Errors from the concert-listing service seam.
///
/// Callers branch on `InvalidQuery` (recovered into a canned user reply);
/// everything else abandons the item being processed.
#[derive(Debug, Error)]
pub enum ConcertError {
    /// The search input was empty.
    #[error("can't search with an empty query")]
    InvalidQuery,
    /// The request failed in transit or the body was not valid JSON.
    #[error("concert service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response parsed but did not have the expected shape.
    #[error("unexpected concert service response: {0}")]
    Decode(String),
}

// Traits.

/// Generic concert-data trait that clients must implement.
#[async_trait]
pub trait GenericConcertClient {
    /// Resolve an artist by name. `Ok(None)` when the search has no results.
    async fn find_artist(&self, name: &str) -> Result<Option<Artist>, ConcertError>;
    /// Fetch an artist's upcoming-event calendar. `Ok(None)` when empty.
    async fn find_upcoming_events(&self, artist_id: &str) -> Result<Option<EventCalendar>, ConcertError>;
}

// Structs.

/// Concert-data client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct ConcertClient {
    inner: Arc<dyn GenericConcertClient + Send + Sync + 'static>,
}

impl Deref for ConcertClient {
    type Target = dyn GenericConcertClient + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl ConcertClient {
    /// Creates a client from any implementation. Used by tests to install mocks.
    pub fn new(inner: Arc<dyn GenericConcertClient + Send + Sync + 'static>) -> Self {
        Self { inner }
    }

    /// Creates a new Songkick-backed client.
    pub fn songkick(config: &Config) -> Self {
        Self {
            inner: Arc::new(SongkickClient::new(config)),
        }
    }
}

// Specific implementations.

const SONGKICK_BASE_URL: &str = "https://api.songkick.com/api/3.0";

/// Songkick API client implementation.
#[derive(Clone)]
pub struct SongkickClient {
    client: reqwest::Client,
    api_key: String,
}

impl SongkickClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.songkick_api_key.clone(),
        }
    }
}

#[async_trait]
impl GenericConcertClient for SongkickClient {
    #[instrument(skip(self))]
    async fn find_artist(&self, name: &str) -> Result<Option<Artist>, ConcertError> {
        if name.is_empty() {
            return Err(ConcertError::InvalidQuery);
        }

        let url = format!("{SONGKICK_BASE_URL}/search/artists.json");
        let page: ResultsPage<ArtistResults> = self
            .client
            .get(&url)
            .query(&[("query", name), ("apikey", &self.api_key)])
            .send()
            .await?
            .error_for_status()?
            .json::<SongkickResponse<ArtistResults>>()
            .await?
            .results_page;

        if page.total_entries == 0 {
            info!("No artist results found.");
            return Ok(None);
        }

        info!("{} artist results found.", page.total_entries);

        // Only the first result is ever used; no disambiguation or ranking.
        let first = page
            .results
            .unwrap_or_default()
            .artist
            .into_iter()
            .next()
            .ok_or_else(|| ConcertError::Decode("non-zero totalEntries but no artist entries".to_string()))?;

        info!("First result: {} - ID: {}", first.display_name, first.id);

        Ok(Some(Artist {
            name: first.display_name,
            id: first.id.to_string(),
            url: first.uri,
        }))
    }

    #[instrument(skip(self))]
    async fn find_upcoming_events(&self, artist_id: &str) -> Result<Option<EventCalendar>, ConcertError> {
        if artist_id.is_empty() {
            return Err(ConcertError::InvalidQuery);
        }

        let url = format!("{SONGKICK_BASE_URL}/artists/{artist_id}/calendar.json");
        let page: ResultsPage<EventResults> = self
            .client
            .get(&url)
            .query(&[("apikey", &self.api_key)])
            .send()
            .await?
            .error_for_status()?
            .json::<SongkickResponse<EventResults>>()
            .await?
            .results_page;

        if page.total_entries == 0 {
            info!("No events found.");
            return Ok(None);
        }

        info!("{} upcoming events found.", page.total_entries);

        let events = page
            .results
            .unwrap_or_default()
            .event
            .into_iter()
            .map(|e| {
                let date = e
                    .start
                    .and_then(|s| s.date)
                    .ok_or_else(|| ConcertError::Decode("event record has no start date".to_string()))?;
                let city = e
                    .location
                    .and_then(|l| l.city)
                    .ok_or_else(|| ConcertError::Decode("event record has no location city".to_string()))?;

                Ok(Event { date, city })
            })
            .collect::<Result<Vec<_>, ConcertError>>()?;

        Ok(Some(EventCalendar {
            total: page.total_entries,
            events,
        }))
    }
}

// Wire types for the Songkick 3.0 JSON envelope.

#[derive(Debug, Deserialize)]
struct SongkickResponse<R> {
    #[serde(rename = "resultsPage")]
    results_page: ResultsPage<R>,
}

#[derive(Debug, Deserialize)]
struct ResultsPage<R> {
    #[serde(rename = "totalEntries", default)]
    total_entries: u64,
    // Songkick sends `"results": {}` when there are no entries.
    results: Option<R>,
}

#[derive(Debug, Deserialize, Default)]
struct ArtistResults {
    #[serde(default)]
    artist: Vec<WireArtist>,
}

#[derive(Debug, Deserialize)]
struct WireArtist {
    #[serde(rename = "displayName")]
    display_name: String,
    id: u64,
    uri: String,
}

#[derive(Debug, Deserialize, Default)]
struct EventResults {
    #[serde(default)]
    event: Vec<WireEvent>,
}

#[derive(Debug, Deserialize)]
struct WireEvent {
    start: Option<WireStart>,
    location: Option<WireLocation>,
}

#[derive(Debug, Deserialize)]
struct WireStart {
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireLocation {
    city: Option<String>,
}
