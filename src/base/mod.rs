//! Core components, types, and utilities for the concert-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Fixed reply texts (signature, canned error replies).
//! - Common types and result handling.

pub mod config;
pub mod messages;
pub mod types;
