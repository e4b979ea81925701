//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for the services used by concert-bot:
//! - Comment feed (Reddit)
//! - Concert data (Songkick)
//! - Seen-comment storage (sqlite)
//!
//! The feed and concert modules define both generic traits and concrete
//! implementations, allowing for extensibility and easy testing.

pub mod concerts;
pub mod db;
pub mod feed;
