//! Navigation-related state types.
//!
//! This module contains the closed set of screens, the payload a transition
//! may carry, and the resolved route each screen renders from.

use super::NavigationError;
use crate::content::{Circle, Post};
use std::fmt;
use std::str::FromStr;

/// Specifying the different screens.
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Screen {
    Splash,
    Onboarding,
    Home,
    Create,
    PostDetail,
    Reply,
    Circles,
    CircleFeed,
    Profile,
    MoodPulse,
    DailyUnload,
    Settings,
    Help,
    Legal,
    Error,
}

impl Screen {
    pub const ALL: [Screen; 15] = [
        Screen::Splash,
        Screen::Onboarding,
        Screen::Home,
        Screen::Create,
        Screen::PostDetail,
        Screen::Reply,
        Screen::Circles,
        Screen::CircleFeed,
        Screen::Profile,
        Screen::MoodPulse,
        Screen::DailyUnload,
        Screen::Settings,
        Screen::Help,
        Screen::Legal,
        Screen::Error,
    ];

    /// Return the screen id.
    ///
    pub fn id(&self) -> &'static str {
        match self {
            Screen::Splash => "splash",
            Screen::Onboarding => "onboarding",
            Screen::Home => "home",
            Screen::Create => "create",
            Screen::PostDetail => "post-detail",
            Screen::Reply => "reply",
            Screen::Circles => "circles",
            Screen::CircleFeed => "circle-feed",
            Screen::Profile => "profile",
            Screen::MoodPulse => "mood-pulse",
            Screen::DailyUnload => "daily-unload",
            Screen::Settings => "settings",
            Screen::Help => "help",
            Screen::Legal => "legal",
            Screen::Error => "error",
        }
    }

    /// Return the title shown in the screen header.
    ///
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Splash => "SoulSpace",
            Screen::Onboarding => "Welcome",
            Screen::Home => "SoulSpace",
            Screen::Create => "Share Your Soul",
            Screen::PostDetail => "Post",
            Screen::Reply => "Echo Back",
            Screen::Circles => "Soul Circles",
            Screen::CircleFeed => "Circle",
            Screen::Profile => "Ghost Mode",
            Screen::MoodPulse => "Mood Pulse",
            Screen::DailyUnload => "Daily Unload",
            Screen::Settings => "Settings",
            Screen::Help => "Help & Safety",
            Screen::Legal => "Privacy & Terms",
            Screen::Error => "Lost Soul",
        }
    }

    /// Return the listing screen to fall back to when the context this
    /// screen needs is missing, or None if it needs no context.
    ///
    pub fn context_fallback(&self) -> Option<Screen> {
        match self {
            Screen::PostDetail | Screen::Reply => Some(Screen::Home),
            Screen::CircleFeed => Some(Screen::Circles),
            _ => None,
        }
    }

    /// Return the screen a "back" action leads to.
    ///
    pub fn back_target(&self) -> Screen {
        match self {
            Screen::Reply => Screen::PostDetail,
            Screen::CircleFeed => Screen::Circles,
            Screen::Settings => Screen::Profile,
            Screen::Help | Screen::Legal => Screen::Settings,
            _ => Screen::Home,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Screen {
    type Err = NavigationError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .iter()
            .find(|screen| screen.id() == id)
            .copied()
            .ok_or_else(|| NavigationError::UnknownScreen { id: id.to_string() })
    }
}

/// Data attached to a transition. Each field, when present, replaces the
/// retained context of its kind; absent fields leave it untouched.
///
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Payload {
    pub post: Option<Post>,
    pub circle: Option<Circle>,
}

impl Payload {
    pub fn none() -> Self {
        Payload::default()
    }

    pub fn post(post: Post) -> Self {
        Payload {
            post: Some(post),
            circle: None,
        }
    }

    pub fn circle(circle: Circle) -> Self {
        Payload {
            post: None,
            circle: Some(circle),
        }
    }
}

/// A screen together with the context it renders from. Screens that need a
/// post or circle carry it, so a route can never be missing its input.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Splash,
    Onboarding,
    Home,
    Create,
    PostDetail(Post),
    Reply(Post),
    Circles,
    CircleFeed(Circle),
    Profile,
    MoodPulse,
    DailyUnload,
    Settings,
    Help,
    Legal,
    Error,
}

impl Route {
    /// Return the screen this route renders.
    ///
    pub fn screen(&self) -> Screen {
        match self {
            Route::Splash => Screen::Splash,
            Route::Onboarding => Screen::Onboarding,
            Route::Home => Screen::Home,
            Route::Create => Screen::Create,
            Route::PostDetail(_) => Screen::PostDetail,
            Route::Reply(_) => Screen::Reply,
            Route::Circles => Screen::Circles,
            Route::CircleFeed(_) => Screen::CircleFeed,
            Route::Profile => Screen::Profile,
            Route::MoodPulse => Screen::MoodPulse,
            Route::DailyUnload => Screen::DailyUnload,
            Route::Settings => Screen::Settings,
            Route::Help => Screen::Help,
            Route::Legal => Screen::Legal,
            Route::Error => Screen::Error,
        }
    }

    /// Return the route for a screen that needs no context.
    ///
    pub(crate) fn contextless(screen: Screen) -> Option<Route> {
        let route = match screen {
            Screen::Splash => Route::Splash,
            Screen::Onboarding => Route::Onboarding,
            Screen::Home => Route::Home,
            Screen::Create => Route::Create,
            Screen::Circles => Route::Circles,
            Screen::Profile => Route::Profile,
            Screen::MoodPulse => Route::MoodPulse,
            Screen::DailyUnload => Route::DailyUnload,
            Screen::Settings => Route::Settings,
            Screen::Help => Route::Help,
            Screen::Legal => Route::Legal,
            Screen::Error => Route::Error,
            Screen::PostDetail | Screen::Reply | Screen::CircleFeed => return None,
        };
        Some(route)
    }
}

/// Process-wide navigation state. Only the router writes it.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    route: Route,
    post: Option<Post>,
    circle: Option<Circle>,
}

impl NavigationState {
    /// Return the state every process starts in.
    ///
    pub fn initial() -> Self {
        NavigationState {
            route: Route::Splash,
            post: None,
            circle: None,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.route.screen()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Return the retained post context.
    ///
    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    /// Return the retained circle context.
    ///
    pub fn circle(&self) -> Option<&Circle> {
        self.circle.as_ref()
    }

    pub(super) fn set_route(&mut self, route: Route) {
        self.route = route;
    }

    pub(super) fn retain_post(&mut self, post: Post) {
        self.post = Some(post);
    }

    pub(super) fn retain_circle(&mut self, circle: Circle) {
        self.circle = Some(circle);
    }
}
