use super::{
    validate_mood, CircleId, CircleRegistry, ContentError, Ephemeral, Post, PostDraft, PostId,
    Reply, ReplyDraft, ReplyId, Repository,
};
use chrono::{DateTime, Utc};
use log::*;

/// Transient, process-lifetime content store.
///
#[derive(Debug, Default)]
pub struct MemoryRepository {
    registry: CircleRegistry,
    posts: Vec<Post>,
    replies: Vec<Reply>,
}

impl MemoryRepository {
    /// Return an empty repository backed by the given circle catalog.
    ///
    pub fn new(registry: CircleRegistry) -> Self {
        MemoryRepository {
            registry,
            posts: vec![],
            replies: vec![],
        }
    }

    fn visible_post_mut(
        &mut self,
        id: PostId,
        now: DateTime<Utc>,
    ) -> Result<&mut Post, ContentError> {
        self.posts
            .iter_mut()
            .find(|post| post.id() == id && !post.is_expired(now))
            .ok_or_else(|| ContentError::PostNotFound { id: id.to_string() })
    }

    fn is_post_visible(&self, id: PostId, now: DateTime<Utc>) -> bool {
        self.posts
            .iter()
            .any(|post| post.id() == id && !post.is_expired(now))
    }

    fn newest_first<'a, I>(posts: I) -> Vec<Post>
    where
        I: Iterator<Item = &'a Post>,
    {
        let mut posts: Vec<Post> = posts.cloned().collect();
        posts.reverse();
        posts.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        posts
    }
}

impl Repository for MemoryRepository {
    fn circles(&self) -> &CircleRegistry {
        &self.registry
    }

    fn create_post(&mut self, draft: PostDraft, now: DateTime<Utc>) -> Result<Post, ContentError> {
        let mood = validate_mood(&draft.mood)?;
        if let Some(circle_id) = draft.circle_id {
            self.registry.lookup(circle_id)?;
        }
        let post = Post::new(mood, draft.content, draft.circle_id, now)?;
        info!(
            "Created {} post {} (circle: {}).",
            post.mood(),
            post.id(),
            post.circle_id()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "none".to_string())
        );
        self.posts.push(post.clone());
        Ok(post)
    }

    fn create_reply(
        &mut self,
        draft: ReplyDraft,
        now: DateTime<Utc>,
    ) -> Result<Reply, ContentError> {
        let mood = validate_mood(&draft.mood)?;
        let parent = self
            .posts
            .iter_mut()
            .find(|post| post.id() == draft.parent_post_id)
            .ok_or_else(|| ContentError::PostNotFound {
                id: draft.parent_post_id.to_string(),
            })?;
        let reply = Reply::new(parent, mood, draft.content, now)?;
        parent.add_reply();
        info!("Created {} reply {} to post {}.", reply.mood(), reply.id(), parent.id());
        self.replies.push(reply.clone());
        Ok(reply)
    }

    fn feed(&self, now: DateTime<Utc>) -> Vec<Post> {
        MemoryRepository::newest_first(self.posts.iter().filter(|post| !post.is_expired(now)))
    }

    fn circle_feed(&self, id: CircleId, now: DateTime<Utc>) -> Result<Vec<Post>, ContentError> {
        self.registry.lookup(id)?;
        Ok(MemoryRepository::newest_first(self.posts.iter().filter(
            |post| post.circle_id() == Some(id) && !post.is_expired(now),
        )))
    }

    fn post(&self, id: PostId, now: DateTime<Utc>) -> Result<Post, ContentError> {
        self.posts
            .iter()
            .find(|post| post.id() == id && !post.is_expired(now))
            .cloned()
            .ok_or_else(|| ContentError::PostNotFound { id: id.to_string() })
    }

    fn replies(&self, post_id: PostId, now: DateTime<Utc>) -> Result<Vec<Reply>, ContentError> {
        if !self.is_post_visible(post_id, now) {
            return Err(ContentError::PostNotFound {
                id: post_id.to_string(),
            });
        }
        let mut replies: Vec<Reply> = self
            .replies
            .iter()
            .filter(|reply| reply.parent_post_id() == post_id && !reply.is_expired(now))
            .cloned()
            .collect();
        replies.sort_by_key(|reply| reply.created_at());
        Ok(replies)
    }

    fn empathize_post(&mut self, id: PostId, now: DateTime<Utc>) -> Result<Post, ContentError> {
        let post = self.visible_post_mut(id, now)?;
        post.add_empathy();
        debug!("Post {} now has {} empathy.", post.id(), post.empathy_count());
        Ok(post.clone())
    }

    fn empathize_reply(&mut self, id: ReplyId, now: DateTime<Utc>) -> Result<Reply, ContentError> {
        let parent_id = self
            .replies
            .iter()
            .find(|reply| reply.id() == id && !reply.is_expired(now))
            .map(|reply| reply.parent_post_id())
            .ok_or_else(|| ContentError::ReplyNotFound { id: id.to_string() })?;
        if !self.is_post_visible(parent_id, now) {
            return Err(ContentError::ReplyNotFound { id: id.to_string() });
        }
        let reply = self
            .replies
            .iter_mut()
            .find(|reply| reply.id() == id)
            .ok_or_else(|| ContentError::ReplyNotFound { id: id.to_string() })?;
        reply.add_empathy();
        Ok(reply.clone())
    }

    fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.posts.len() + self.replies.len();
        self.posts.retain(|post| !post.is_expired(now));
        let posts = &self.posts;
        self.replies.retain(|reply| {
            !reply.is_expired(now) && posts.iter().any(|post| post.id() == reply.parent_post_id())
        });
        let removed = before - (self.posts.len() + self.replies.len());
        if removed > 0 {
            debug!("Purged {} expired entries.", removed);
        }
        removed
    }
}
