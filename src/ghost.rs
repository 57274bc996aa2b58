//! Anonymous session identity.
//!
//! A ghost is the per-session persona shown on the profile screen. It is
//! never attached to published content.

use rand::Rng;
use std::fmt;

const GHOST_NUMBER_MIN: u16 = 1000;
const GHOST_NUMBER_MAX: u16 = 9999;

/// Houses the anonymous identity of the current session.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ghost {
    number: u16,
}

impl Ghost {
    /// Return a ghost with a random four digit number.
    ///
    pub fn summon() -> Self {
        Ghost::summon_with(&mut rand::thread_rng())
    }

    pub fn summon_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Ghost {
            number: rng.gen_range(GHOST_NUMBER_MIN..=GHOST_NUMBER_MAX),
        }
    }

    pub fn number(&self) -> u16 {
        self.number
    }

    pub fn name(&self) -> String {
        format!("Anonymous Soul #{}", self.number)
    }
}

impl fmt::Display for Ghost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// In-memory counters of what the ghost did this session.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    posts_shared: u32,
    echoes_sent: u32,
    empathy_given: u32,
}

impl SessionStats {
    pub fn posts_shared(&self) -> u32 {
        self.posts_shared
    }

    pub fn echoes_sent(&self) -> u32 {
        self.echoes_sent
    }

    pub fn empathy_given(&self) -> u32 {
        self.empathy_given
    }

    pub fn record_post(&mut self) -> &mut Self {
        self.posts_shared = self.posts_shared.saturating_add(1);
        self
    }

    pub fn record_echo(&mut self) -> &mut Self {
        self.echoes_sent = self.echoes_sent.saturating_add(1);
        self
    }

    pub fn record_empathy(&mut self) -> &mut Self {
        self.empathy_given = self.empathy_given.saturating_add(1);
        self
    }
}
