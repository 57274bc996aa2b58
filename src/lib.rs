//! Terminal client for anonymous, ephemeral mood sharing.
//!
//! Ghosts share posts tagged with a mood, send empathy and echo back with
//! replies. Everything vanishes 24 hours after it is shared.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod ghost;
pub mod logger;
pub mod state;
pub mod ui;
