//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Content events: repository reads and writes queued by the state
//! - Terminal events: User input and terminal interactions

pub mod content;
pub mod terminal;
