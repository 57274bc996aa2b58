//! One-shot timer that advances the splash screen.

use chrono::{DateTime, Duration, Utc};

/// Default delay before leaving the splash screen in milliseconds.
///
pub const DEFAULT_SPLASH_DELAY_IN_MS: u64 = 2000;

/// Deferred, cancellable single-shot transition. It holds a deadline rather
/// than a thread so the owner decides when time is checked.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashTimer {
    delay: Duration,
    deadline: Option<DateTime<Utc>>,
}

impl SplashTimer {
    pub fn new(delay: Duration) -> Self {
        SplashTimer {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule the transition one delay after `now`, replacing any pending
    /// deadline.
    ///
    pub fn arm(&mut self, now: DateTime<Utc>) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending transition. Safe to call when nothing is pending.
    ///
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Return true exactly once when the deadline has been reached.
    ///
    pub fn poll(&mut self, now: DateTime<Utc>) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for SplashTimer {
    fn default() -> Self {
        SplashTimer::new(Duration::milliseconds(DEFAULT_SPLASH_DELAY_IN_MS as i64))
    }
}
