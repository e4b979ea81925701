//! Decision logic for polled comments.
//!
//! This module ties the services together per comment:
//! - Trigger detection and quoted-payload extraction
//! - Reply composition for each terminal outcome
//! - The per-comment pipeline and the per-cycle sweep

pub mod comment;
pub mod reply;
pub mod sweep;
pub mod trigger;
