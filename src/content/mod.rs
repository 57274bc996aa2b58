//! Ephemeral content module.
//!
//! This module contains the content model and its storage boundary:
//! - Mood taxonomy and validation
//! - Post and reply entities with their 24 hour lifetime
//! - The closed circle registry
//! - The `Repository` interface and its in-memory implementation
//! - Mood pulse aggregation
//! - Daily unload prompts

mod circle;
mod error;
mod lifecycle;
mod memory;
mod mood;
mod post;
mod prompt;
mod pulse;

pub use circle::{format_count, Circle, CircleId, CircleRegistry};
pub use error::ContentError;
pub use lifecycle::{
    format_age, format_remaining, time_to_live, Clock, Ephemeral, ManualClock, SystemClock,
    TIME_TO_LIVE_HOURS,
};
pub use memory::MemoryRepository;
pub use mood::{validate_mood, Mood, MoodTint};
pub use post::{Content, Post, PostId, Reply, ReplyId};
pub use prompt::{next_prompt, DAILY_PROMPTS};
pub use pulse::{MoodPulse, MoodShare};

use chrono::{DateTime, Utc};

/// Raw request to publish a post. The mood is an unvalidated tag.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostDraft {
    pub mood: String,
    pub content: Content,
    pub circle_id: Option<CircleId>,
}

/// Raw request to publish a reply. The mood is an unvalidated tag.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyDraft {
    pub parent_post_id: PostId,
    pub mood: String,
    pub content: Content,
}

/// Storage boundary for content. Queries never return expired entries;
/// everything returned is a snapshot.
///
pub trait Repository {
    /// Return the circle catalog.
    fn circles(&self) -> &CircleRegistry;

    /// Return the circle with the given id.
    fn lookup_circle(&self, id: CircleId) -> Result<Circle, ContentError> {
        self.circles().lookup(id).cloned()
    }

    fn create_post(&mut self, draft: PostDraft, now: DateTime<Utc>) -> Result<Post, ContentError>;

    fn create_reply(&mut self, draft: ReplyDraft, now: DateTime<Utc>)
        -> Result<Reply, ContentError>;

    /// Return every visible post, newest first.
    fn feed(&self, now: DateTime<Utc>) -> Vec<Post>;

    /// Return visible posts filed into the given circle, newest first.
    fn circle_feed(&self, id: CircleId, now: DateTime<Utc>) -> Result<Vec<Post>, ContentError>;

    fn post(&self, id: PostId, now: DateTime<Utc>) -> Result<Post, ContentError>;

    /// Return visible replies to a visible post, oldest first.
    fn replies(&self, post_id: PostId, now: DateTime<Utc>) -> Result<Vec<Reply>, ContentError>;

    fn empathize_post(&mut self, id: PostId, now: DateTime<Utc>) -> Result<Post, ContentError>;

    fn empathize_reply(&mut self, id: ReplyId, now: DateTime<Utc>)
        -> Result<Reply, ContentError>;

    /// Drop expired entries, returning how many were removed.
    fn purge_expired(&mut self, now: DateTime<Utc>) -> usize;
}
