//! Post and reply entities.
//!
//! Content and mood are write-once. The only mutation after creation is the
//! counters moving up, which is restricted to the repository.

use super::circle::CircleId;
use super::lifecycle::{time_to_live, Ephemeral};
use super::{ContentError, Mood};
use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a post.
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct PostId(Uuid);

/// Unique identifier of a reply ("echo").
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct ReplyId(Uuid);

impl PostId {
    pub fn generate() -> Self {
        PostId(Uuid::new_v4())
    }
}

impl ReplyId {
    pub fn generate() -> Self {
        ReplyId(Uuid::new_v4())
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ReplyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Body of a post or reply as provided by the author.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Content {
    Text(String),
    Voice { transcript: String },
    Doodle { reference: String },
}

impl Content {
    /// Return the content with surrounding whitespace removed, or an error if
    /// nothing remains.
    ///
    pub fn normalized(self) -> Result<Content, ContentError> {
        let content = match self {
            Content::Text(text) => Content::Text(text.trim().to_string()),
            Content::Voice { transcript } => Content::Voice {
                transcript: transcript.trim().to_string(),
            },
            Content::Doodle { reference } => Content::Doodle {
                reference: reference.trim().to_string(),
            },
        };
        if content.body().is_empty() {
            return Err(ContentError::EmptyContent);
        }
        Ok(content)
    }

    /// Return the displayable body.
    ///
    pub fn body(&self) -> &str {
        match self {
            Content::Text(text) => text,
            Content::Voice { transcript } => transcript,
            Content::Doodle { reference } => reference,
        }
    }

    /// Return a short marker for non-text bodies.
    ///
    pub fn kind_label(&self) -> Option<&'static str> {
        match self {
            Content::Text(_) => None,
            Content::Voice { .. } => Some("voice"),
            Content::Doodle { .. } => Some("doodle"),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

/// Defines an anonymous post.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Post {
    id: PostId,
    mood: Mood,
    content: Content,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    empathy_count: u32,
    reply_count: u32,
    circle_id: Option<CircleId>,
}

impl Post {
    /// Return a new post created at `now`, expiring one lifetime later.
    ///
    pub fn new(
        mood: Mood,
        content: Content,
        circle_id: Option<CircleId>,
        now: DateTime<Utc>,
    ) -> Result<Post, ContentError> {
        Ok(Post {
            id: PostId::generate(),
            mood,
            content: content.normalized()?,
            created_at: now,
            expires_at: now + time_to_live(),
            empathy_count: 0,
            reply_count: 0,
            circle_id,
        })
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn empathy_count(&self) -> u32 {
        self.empathy_count
    }

    pub fn reply_count(&self) -> u32 {
        self.reply_count
    }

    pub fn circle_id(&self) -> Option<CircleId> {
        self.circle_id
    }

    pub(crate) fn add_empathy(&mut self) {
        self.empathy_count = self.empathy_count.saturating_add(1);
    }

    pub(crate) fn add_reply(&mut self) {
        self.reply_count = self.reply_count.saturating_add(1);
    }
}

impl Ephemeral for Post {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

/// Defines an anonymous reply to a post.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Reply {
    id: ReplyId,
    parent_post_id: PostId,
    mood: Mood,
    content: Content,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    empathy_count: u32,
    reply_count: u32,
}

impl Reply {
    /// Return a new reply to `parent` created at `now`. The parent must still
    /// be visible.
    ///
    pub fn new(
        parent: &Post,
        mood: Mood,
        content: Content,
        now: DateTime<Utc>,
    ) -> Result<Reply, ContentError> {
        if parent.is_expired(now) {
            return Err(ContentError::ParentExpired {
                id: parent.id().to_string(),
            });
        }
        Ok(Reply {
            id: ReplyId::generate(),
            parent_post_id: parent.id(),
            mood,
            content: content.normalized()?,
            created_at: now,
            expires_at: now + time_to_live(),
            empathy_count: 0,
            reply_count: 0,
        })
    }

    pub fn id(&self) -> ReplyId {
        self.id
    }

    pub fn parent_post_id(&self) -> PostId {
        self.parent_post_id
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn empathy_count(&self) -> u32 {
        self.empathy_count
    }

    pub fn reply_count(&self) -> u32 {
        self.reply_count
    }

    pub(crate) fn add_empathy(&mut self) {
        self.empathy_count = self.empathy_count.saturating_add(1);
    }
}

impl Ephemeral for Reply {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}
