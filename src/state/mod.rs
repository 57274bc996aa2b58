//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds all application data
//! - Navigation types (Screen, Payload, Route) and the router that owns them
//! - The splash auto-advance timer
//! - Compose form types (ComposeForm, InputMode)
//! - Navigation error handling

mod error;
mod form;
mod navigation;
mod router;
mod splash;

pub use error::NavigationError;
pub use form::{ComposeForm, ComposeKind, InputMode};
pub use navigation::{NavigationState, Payload, Route, Screen};
pub use router::Router;
pub use splash::{SplashTimer, DEFAULT_SPLASH_DELAY_IN_MS};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{SettingsItem, State, ONBOARDING_SLIDE_COUNT};
