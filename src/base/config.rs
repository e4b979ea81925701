//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default user agent sent with every Reddit request.
fn default_user_agent() -> String {
    "Dean Keinan's concert information bot".to_string()
}

/// Default subreddit to scan for mentions.
fn default_subreddit() -> String {
    "concertbot".to_string()
}

/// Default trigger substrings that mark a comment as addressed to the bot.
fn default_triggers() -> Vec<String> {
    vec!["!cb".to_string(), "!concertbot".to_string(), "!livemusic".to_string()]
}

/// Default maximum number of comments examined per poll cycle.
fn default_max_posts() -> usize {
    6
}

/// Default seconds to sleep between poll cycles.
fn default_poll_interval_secs() -> u64 {
    20
}

/// Default path of the seen-comment database.
fn default_db_path() -> String {
    "sql.db".to_string()
}

/// Configuration for the concert-bot application.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// The shared, immutable configuration values.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// The configuration values, immutable for the process lifetime.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Reddit account username (`REDDIT_USERNAME`).
    pub reddit_username: String,
    /// Reddit account password (`REDDIT_PASSWORD`).
    pub reddit_password: String,
    /// Reddit script-app client id (`REDDIT_CLIENT_ID`).
    pub reddit_client_id: String,
    /// Reddit script-app client secret (`REDDIT_CLIENT_SECRET`).
    pub reddit_client_secret: String,
    /// User agent sent with every Reddit request (`USER_AGENT`).
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Songkick API key (`SONGKICK_API_KEY`).
    pub songkick_api_key: String,
    /// Subreddit scanned for mentions (`SUBREDDIT`).
    #[serde(default = "default_subreddit")]
    pub subreddit: String,
    /// Trigger substrings that mark a comment as addressed to the bot
    /// (`TRIGGERS`). Matched case-sensitively as exact substrings.
    #[serde(default = "default_triggers")]
    pub triggers: Vec<String>,
    /// Maximum number of comments examined per poll cycle (`MAX_POSTS`).
    #[serde(default = "default_max_posts")]
    pub max_posts: usize,
    /// Seconds to sleep between poll cycles (`POLL_INTERVAL_SECS`).
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Path of the seen-comment sqlite database (`DB_PATH`).
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Config {
    /// Load configuration from the environment and an optional TOML file,
    /// then validate the tunables.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("CONCERT_BOT"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        if result.triggers.is_empty() {
            return Err(anyhow::anyhow!("At least one trigger substring must be configured."));
        }

        if result.max_posts < 1 {
            return Err(anyhow::anyhow!("Max posts per cycle must be at least 1."));
        }

        Ok(result)
    }
}
