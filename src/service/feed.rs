//! Wrapper around comment-feed clients.

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::base::{
    config::Config,
    types::{Res, Void},
};

// Types.

/// A single comment polled from the feed.
///
/// Owned by the feed transport; read-only to the rest of the bot.
#[derive(Debug, Clone)]
pub struct FeedItem {
    /// Platform-unique comment id.
    pub id: String,
    /// Author account name; `None` when the account is deleted or removed.
    pub author: Option<String>,
    /// Raw comment body text.
    pub body: String,
}

// Traits.

/// Generic comment-feed trait that clients must implement.
#[async_trait]
pub trait GenericFeedClient {
    /// The bot's own account name on the platform.
    fn bot_username(&self) -> &str;
    /// Fetch at most `limit` recent comments, in platform order.
    async fn recent_comments(&self, limit: usize) -> Res<Vec<FeedItem>>;
    /// Post `text` as a reply to the comment with id `item_id`.
    async fn reply(&self, item_id: &str, text: &str) -> Void;
}

// Structs.

/// Feed client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct FeedClient {
    inner: Arc<dyn GenericFeedClient + Send + Sync + 'static>,
}

impl Deref for FeedClient {
    type Target = dyn GenericFeedClient + Send + Sync + 'static;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl FeedClient {
    /// Creates a client from any implementation. Used by tests to install mocks.
    pub fn new(inner: Arc<dyn GenericFeedClient + Send + Sync + 'static>) -> Self {
        Self { inner }
    }

    /// Creates a new Reddit-backed feed client, logging in immediately.
    pub async fn reddit(config: &Config) -> Res<Self> {
        let client = RedditFeedClient::new(config).await?;
        Ok(Self {
            inner: Arc::new(client),
        })
    }
}

// Specific implementations.

const REDDIT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const REDDIT_API_BASE: &str = "https://oauth.reddit.com";

/// Reddit client implementation for a script app.
#[derive(Clone)]
pub struct RedditFeedClient {
    client: reqwest::Client,
    access_token: String,
    username: String,
    subreddit: String,
}

impl RedditFeedClient {
    /// Create a new Reddit feed client.
    ///
    /// Performs an OAuth2 password-grant login once; the token is held for
    /// the process lifetime and never refreshed.
    #[instrument(name = "RedditFeedClient::new", skip_all)]
    pub async fn new(config: &Config) -> Res<Self> {
        info!("Logging in to Reddit as `{}` ...", config.reddit_username);

        let client = reqwest::Client::builder().user_agent(config.user_agent.clone()).build()?;

        let token: TokenResponse = client
            .post(REDDIT_TOKEN_URL)
            .basic_auth(&config.reddit_client_id, Some(&config.reddit_client_secret))
            .form(&[
                ("grant_type", "password"),
                ("username", &config.reddit_username),
                ("password", &config.reddit_password),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        info!("Logged in.");

        Ok(Self {
            client,
            access_token: token.access_token,
            username: config.reddit_username.clone(),
            subreddit: config.subreddit.clone(),
        })
    }
}

#[async_trait]
impl GenericFeedClient for RedditFeedClient {
    fn bot_username(&self) -> &str {
        &self.username
    }

    #[instrument(skip(self))]
    async fn recent_comments(&self, limit: usize) -> Res<Vec<FeedItem>> {
        let url = format!("{REDDIT_API_BASE}/r/{}/comments", self.subreddit);

        let listing: Listing = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[("limit", limit.to_string()), ("raw_json", "1".to_string())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let items = listing
            .data
            .children
            .into_iter()
            .map(|child| {
                let data = child.data;

                // Reddit reports deleted accounts as the literal "[deleted]".
                let author = data.author.filter(|a| a != "[deleted]");

                FeedItem {
                    id: data.id,
                    author,
                    body: data.body,
                }
            })
            .collect();

        Ok(items)
    }

    #[instrument(skip(self, text))]
    async fn reply(&self, item_id: &str, text: &str) -> Void {
        let url = format!("{REDDIT_API_BASE}/api/comment");
        let thing_id = format!("t1_{item_id}");

        self.client
            .post(&url)
            .bearer_auth(&self.access_token)
            .form(&[("api_type", "json"), ("thing_id", thing_id.as_str()), ("text", text)])
            .send()
            .await?
            .error_for_status()
            .map_err(|e| anyhow::anyhow!("Failed to post reply: {}", e))?;

        Ok(())
    }
}

// Wire types for the Reddit comment listing.

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: CommentData,
}

#[derive(Debug, Deserialize)]
struct CommentData {
    id: String,
    author: Option<String>,
    #[serde(default)]
    body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_deserializes_and_maps_deleted_authors() {
        let body = r#"{
            "kind": "Listing",
            "data": {
                "children": [
                    {"kind": "t1", "data": {"id": "abc", "author": "someone", "body": "!cb \"Muse\""}},
                    {"kind": "t1", "data": {"id": "def", "author": "[deleted]", "body": "gone"}}
                ]
            }
        }"#;

        let listing: Listing = serde_json::from_str(body).unwrap();
        assert_eq!(listing.data.children.len(), 2);

        let author = listing.data.children[1].data.author.clone().filter(|a| a != "[deleted]");
        assert!(author.is_none());
    }
}
