//! Reusable UI widget components.
//!
//! This module contains reusable widget components such as post cards and
//! styling utilities.

pub mod post_card;
pub mod styling;
