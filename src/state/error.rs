//! Navigation-specific error types.
//!
//! None of these escape the router: each one is recovered by redirecting to
//! a navigable screen and is kept only for logging and display.

use super::Screen;

/// Errors recovered by the router during a transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// Navigation target is not a known screen id
    #[error("Unknown screen: '{id}'")]
    UnknownScreen { id: String },

    /// Screen entered without the post or circle it needs
    #[error("Missing context for {screen}, redirected to {fallback}")]
    MissingContext { screen: Screen, fallback: Screen },

    /// Circle payload does not match the registry
    #[error("Circle not found: {id}")]
    CircleNotFound { id: u32 },
}
