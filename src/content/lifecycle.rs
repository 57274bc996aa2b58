//! Content lifecycle.
//!
//! Posts and replies live for a fixed, non-extendable lifetime. Expiry is
//! boundary-exact: content is visible strictly before `expires_at` and
//! hidden from that instant on. All checks take an explicit `now` so callers
//! (and tests) decide what time it is.

use chrono::{DateTime, Duration, Utc};
use std::sync::{Arc, Mutex};

/// Lifetime of every post and reply in hours.
///
pub const TIME_TO_LIVE_HOURS: i64 = 24;

/// Return the lifetime of every post and reply.
///
pub fn time_to_live() -> Duration {
    Duration::hours(TIME_TO_LIVE_HOURS)
}

/// Source of the current time.
///
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to. Clones share the same instant.
///
#[derive(Debug, Clone)]
pub struct ManualClock {
    instant: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        ManualClock {
            instant: Arc::new(Mutex::new(start)),
        }
    }

    /// Jump to the given instant.
    ///
    pub fn set(&self, instant: DateTime<Utc>) {
        let mut guard = self
            .instant
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = instant;
    }

    /// Move the clock forward by the given duration.
    ///
    pub fn advance(&self, by: Duration) {
        let now = self.now();
        self.set(now + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self
            .instant
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Shared behavior of content with a fixed time-to-live.
///
pub trait Ephemeral {
    fn created_at(&self) -> DateTime<Utc>;

    fn expires_at(&self) -> DateTime<Utc>;

    /// Return true once `now` has reached the expiry instant.
    ///
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }

    /// Return the lifetime left at `now`, never negative.
    ///
    fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at() - now).max(Duration::zero())
    }
}

/// Format a remaining lifetime for display, e.g. "23h 59m left".
///
pub fn format_remaining(remaining: Duration) -> String {
    if remaining <= Duration::zero() {
        return "expired".to_string();
    }
    let hours = remaining.num_hours();
    let minutes = remaining.num_minutes() % 60;
    if hours > 0 {
        format!("{}h {}m left", hours, minutes)
    } else if minutes > 0 {
        format!("{}m left", minutes)
    } else {
        "<1m left".to_string()
    }
}

/// Format the age of content relative to `now`, e.g. "15m ago".
///
pub fn format_age(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let age = now - created_at;
    if age < Duration::minutes(1) {
        "just now".to_string()
    } else if age < Duration::hours(1) {
        format!("{}m ago", age.num_minutes())
    } else if age < Duration::days(1) {
        format!("{}h ago", age.num_hours())
    } else {
        format!("{}d ago", age.num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Window {
        created_at: DateTime<Utc>,
    }

    impl Ephemeral for Window {
        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }

        fn expires_at(&self) -> DateTime<Utc> {
            self.created_at + time_to_live()
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.ymd(2024, 3, 1).and_hms(8, 0, 0)
    }

    #[test]
    fn expiry_is_boundary_exact() {
        let window = Window { created_at: t0() };
        let expires_at = window.expires_at();
        assert!(!window.is_expired(expires_at - Duration::milliseconds(1)));
        assert!(!window.is_expired(expires_at - Duration::seconds(1)));
        assert!(window.is_expired(expires_at));
        assert!(window.is_expired(expires_at + Duration::hours(5)));
    }

    #[test]
    fn remaining_never_negative() {
        let window = Window { created_at: t0() };
        assert_eq!(window.remaining(t0()), Duration::hours(24));
        assert_eq!(
            window.remaining(t0() + Duration::hours(23)),
            Duration::hours(1)
        );
        assert_eq!(window.remaining(t0() + Duration::hours(30)), Duration::zero());
    }

    #[test]
    fn remaining_decreases_monotonically() {
        let window = Window { created_at: t0() };
        let mut previous = window.remaining(t0());
        for minute in 1..=(24 * 60 + 5) {
            let current = window.remaining(t0() + Duration::minutes(minute));
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn format_remaining_renders_hours_and_minutes() {
        assert_eq!(
            format_remaining(Duration::hours(23) + Duration::minutes(59)),
            "23h 59m left"
        );
        assert_eq!(format_remaining(Duration::minutes(12)), "12m left");
        assert_eq!(format_remaining(Duration::seconds(30)), "<1m left");
        assert_eq!(format_remaining(Duration::zero()), "expired");
    }

    #[test]
    fn format_age_renders_relative_time() {
        assert_eq!(format_age(t0(), t0() + Duration::seconds(10)), "just now");
        assert_eq!(format_age(t0(), t0() + Duration::minutes(2)), "2m ago");
        assert_eq!(format_age(t0(), t0() + Duration::hours(3)), "3h ago");
        assert_eq!(format_age(t0(), t0() + Duration::hours(49)), "2d ago");
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(t0());
        let other = clock.clone();
        clock.advance(Duration::minutes(5));
        assert_eq!(other.now(), t0() + Duration::minutes(5));
        other.set(t0());
        assert_eq!(clock.now(), t0());
    }
}
