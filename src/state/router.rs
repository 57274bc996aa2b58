//! Screen router.
//!
//! The router is the single writer of `NavigationState`. Every transition is
//! synchronous and total: any input resolves to exactly one route, and
//! failures are recovered by redirecting rather than returned to the caller.

use super::navigation::{NavigationState, Payload, Route, Screen};
use super::splash::SplashTimer;
use super::NavigationError;
use crate::content::{CircleRegistry, Ephemeral, Post};
use chrono::{DateTime, Utc};
use log::*;

pub struct Router {
    state: NavigationState,
    registry: CircleRegistry,
    splash: SplashTimer,
    last_error: Option<NavigationError>,
}

impl Router {
    /// Return a router on the splash screen with the auto-advance armed.
    ///
    pub fn new(registry: CircleRegistry, splash: SplashTimer, now: DateTime<Utc>) -> Self {
        let mut router = Router {
            state: NavigationState::initial(),
            registry,
            splash,
            last_error: None,
        };
        router.splash.arm(now);
        router
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_screen(&self) -> Screen {
        self.state.current_screen()
    }

    pub fn route(&self) -> &Route {
        self.state.route()
    }

    /// Return the error recovered during the most recent transition.
    ///
    pub fn last_error(&self) -> Option<&NavigationError> {
        self.last_error.as_ref()
    }

    pub fn registry(&self) -> &CircleRegistry {
        &self.registry
    }

    pub fn is_splash_pending(&self) -> bool {
        self.splash.is_pending()
    }

    /// Navigate to a screen by id. Ids outside the closed set resolve to the
    /// error screen. Returns the screen actually shown.
    ///
    pub fn navigate_to(&mut self, id: &str, payload: Payload, now: DateTime<Utc>) -> Screen {
        match id.parse::<Screen>() {
            Ok(screen) => self.navigate(screen, payload, now),
            Err(error) => {
                warn!("{}", error);
                self.absorb(payload);
                self.enter(Route::Error, Some(error), now);
                Screen::Error
            }
        }
    }

    /// Navigate to a screen. Payload fields replace the retained context of
    /// their kind; absent fields leave it untouched. Screens that need a post
    /// or circle redirect to their listing screen when none is available.
    /// Returns the screen actually shown.
    ///
    pub fn navigate(&mut self, screen: Screen, payload: Payload, now: DateTime<Utc>) -> Screen {
        let circle_error = self.absorb(payload);
        let (route, error) = self.resolve(screen, circle_error, now);
        let shown = route.screen();
        self.enter(route, error, now);
        shown
    }

    /// Return to the previous screen in the natural hierarchy.
    ///
    pub fn back(&mut self, now: DateTime<Utc>) -> Screen {
        let target = self.current_screen().back_target();
        self.navigate(target, Payload::none(), now)
    }

    /// Advance time-driven navigation. Leaves the splash screen once its
    /// delay has passed and leaves a post screen once its post has expired.
    /// Returns true if the screen changed.
    ///
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.splash.poll(now) && self.current_screen() == Screen::Splash {
            debug!("Splash delay elapsed.");
            self.navigate(Screen::Onboarding, Payload::none(), now);
            return true;
        }
        let expired = match self.state.route() {
            Route::PostDetail(post) | Route::Reply(post) => post.is_expired(now),
            _ => false,
        };
        if !expired {
            return false;
        }
        // The retained post is the expired one, so this resolves to the fallback.
        let screen = self.current_screen();
        self.navigate(screen, Payload::none(), now);
        true
    }

    /// Re-initialize navigation to its startup state.
    ///
    pub fn reset(&mut self, now: DateTime<Utc>) {
        info!("Resetting navigation.");
        self.state = NavigationState::initial();
        self.last_error = None;
        self.splash.arm(now);
    }

    /// Replace the retained post, and the current route's post, with a newer
    /// snapshot of the same post.
    ///
    pub fn refresh_post(&mut self, post: &Post) {
        if self.state.post().map(|p| p.id()) == Some(post.id()) {
            self.state.retain_post(post.clone());
        }
        let route = match self.state.route() {
            Route::PostDetail(current) if current.id() == post.id() => {
                Route::PostDetail(post.clone())
            }
            Route::Reply(current) if current.id() == post.id() => Route::Reply(post.clone()),
            _ => return,
        };
        self.state.set_route(route);
    }

    /// Store payload fields as retained context. A circle that is not part of
    /// the registry is discarded and reported.
    ///
    fn absorb(&mut self, payload: Payload) -> Option<NavigationError> {
        if let Some(post) = payload.post {
            self.state.retain_post(post);
        }
        let circle = payload.circle?;
        match self.registry.lookup(circle.id) {
            Ok(known) => {
                self.state.retain_circle(known.clone());
                None
            }
            Err(_) => {
                let error = NavigationError::CircleNotFound { id: circle.id.0 };
                warn!("{}", error);
                Some(error)
            }
        }
    }

    fn resolve(
        &self,
        screen: Screen,
        circle_error: Option<NavigationError>,
        now: DateTime<Utc>,
    ) -> (Route, Option<NavigationError>) {
        let route = match screen {
            Screen::PostDetail | Screen::Reply => self
                .state
                .post()
                .filter(|post| !post.is_expired(now))
                .map(|post| match screen {
                    Screen::Reply => Route::Reply(post.clone()),
                    _ => Route::PostDetail(post.clone()),
                }),
            Screen::CircleFeed if circle_error.is_none() => {
                self.state.circle().cloned().map(Route::CircleFeed)
            }
            Screen::CircleFeed => None,
            other => Route::contextless(other),
        };
        match route {
            Some(route) => (route, circle_error),
            None => {
                let fallback = screen.context_fallback().unwrap_or(Screen::Home);
                let error = NavigationError::MissingContext { screen, fallback };
                warn!("{}", error);
                let route = Route::contextless(fallback).unwrap_or(Route::Home);
                (route, Some(error))
            }
        }
    }

    fn enter(&mut self, route: Route, error: Option<NavigationError>, now: DateTime<Utc>) {
        let from = self.current_screen();
        let to = route.screen();
        if to == Screen::Splash {
            self.splash.arm(now);
        } else {
            self.splash.cancel();
        }
        debug!("Navigating from '{}' to '{}'.", from, to);
        self.state.set_route(route);
        self.last_error = error;
    }
}
