use crate::content::{
    CircleId, ContentError, MoodPulse, PostDraft, PostId, ReplyDraft, ReplyId, Repository,
};
use crate::state::{Payload, Screen, State};
use anyhow::Result;
use log::*;

/// Specify different content event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    RefreshFeed,
    RefreshCircleFeed { circle_id: CircleId },
    LoadReplies { post_id: PostId },
    RefreshPulse,
    CreatePost(PostDraft),
    CreateReply(ReplyDraft),
    EmpathizePost { id: PostId },
    EmpathizeReply { id: ReplyId },
    Purge,
}

/// Specify struct for applying content events to the repository and state.
///
pub struct Handler<'a> {
    state: &'a mut State,
    repository: &'a mut dyn Repository,
}

impl<'a> Handler<'a> {
    /// Return new instance with references to state and repository.
    ///
    pub fn new(state: &'a mut State, repository: &'a mut dyn Repository) -> Self {
        Handler { state, repository }
    }

    /// Handle content events by type.
    ///
    pub fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing content event '{:?}'...", event);
        match event {
            Event::RefreshFeed => self.refresh_feed(),
            Event::RefreshCircleFeed { circle_id } => self.refresh_circle_feed(circle_id),
            Event::LoadReplies { post_id } => self.load_replies(post_id),
            Event::RefreshPulse => self.refresh_pulse(),
            Event::CreatePost(draft) => self.create_post(draft),
            Event::CreateReply(draft) => self.create_reply(draft),
            Event::EmpathizePost { id } => self.empathize_post(id),
            Event::EmpathizeReply { id } => self.empathize_reply(id),
            Event::Purge => self.purge(),
        }
        Ok(())
    }

    fn refresh_feed(&mut self) {
        let feed = self.repository.feed(self.state.now());
        debug!("Loaded {} visible posts.", feed.len());
        self.state.set_feed(feed);
    }

    fn refresh_circle_feed(&mut self, circle_id: CircleId) {
        match self.repository.circle_feed(circle_id, self.state.now()) {
            Ok(feed) => {
                self.state.set_circle_feed(feed);
            }
            Err(e) => {
                warn!("Failed to load circle feed: {}", e);
                self.state.set_circle_feed(vec![]);
            }
        }
    }

    fn load_replies(&mut self, post_id: PostId) {
        match self.repository.replies(post_id, self.state.now()) {
            Ok(replies) => {
                self.state.set_replies(replies);
            }
            Err(e) => {
                warn!("Failed to load replies: {}", e);
                self.state.set_replies(vec![]);
            }
        }
    }

    fn refresh_pulse(&mut self) {
        let feed = self.repository.feed(self.state.now());
        self.state.set_pulse(MoodPulse::from_posts(&feed));
    }

    /// Publish a post. Validation failures keep the composer open with the
    /// error shown so the user can fix the input.
    ///
    fn create_post(&mut self, draft: PostDraft) {
        match self.repository.create_post(draft, self.state.now()) {
            Ok(post) => {
                info!("Shared a {} post.", post.mood());
                self.state.get_stats_mut().record_post();
                let circle = post
                    .circle_id()
                    .and_then(|id| self.repository.lookup_circle(id).ok());
                match circle {
                    Some(circle) => {
                        self.state.navigate(Screen::CircleFeed, Payload::circle(circle))
                    }
                    None => self.state.navigate(Screen::Home, Payload::none()),
                };
            }
            Err(e) => self.reprompt(e),
        }
    }

    /// Publish a reply and return to its refreshed parent.
    ///
    fn create_reply(&mut self, draft: ReplyDraft) {
        let now = self.state.now();
        let parent_post_id = draft.parent_post_id;
        match self.repository.create_reply(draft, now) {
            Ok(reply) => {
                info!("Echoed back with a {} reply.", reply.mood());
                self.state.get_stats_mut().record_echo();
                match self.repository.post(parent_post_id, now) {
                    Ok(parent) => {
                        self.state.update_post(parent.clone());
                        self.state
                            .navigate(Screen::PostDetail, Payload::post(parent));
                    }
                    Err(e) => {
                        warn!("Parent vanished after replying: {}", e);
                        self.state.navigate(Screen::Home, Payload::none());
                    }
                }
            }
            Err(e) => self.reprompt(e),
        }
    }

    fn reprompt(&mut self, error: ContentError) {
        warn!("Rejected content: {}", error);
        let message = match error {
            ContentError::InvalidMood { .. } => "Pick a mood before sharing.".to_string(),
            ContentError::EmptyContent => "Write something before sharing.".to_string(),
            ContentError::ParentExpired { .. } | ContentError::PostNotFound { .. } => {
                "This soul has already vanished.".to_string()
            }
            other => other.to_string(),
        };
        self.state.get_compose_mut().set_error(message);
    }

    fn empathize_post(&mut self, id: PostId) {
        match self.repository.empathize_post(id, self.state.now()) {
            Ok(post) => {
                self.state.get_stats_mut().record_empathy();
                self.state.update_post(post);
            }
            Err(e) => {
                warn!("Failed to send empathy: {}", e);
                self.refresh_feed();
            }
        }
    }

    fn empathize_reply(&mut self, id: ReplyId) {
        match self.repository.empathize_reply(id, self.state.now()) {
            Ok(reply) => {
                self.state.get_stats_mut().record_empathy();
                self.state.update_reply(reply);
            }
            Err(e) => warn!("Failed to send empathy: {}", e),
        }
    }

    fn purge(&mut self) {
        let removed = self.repository.purge_expired(self.state.now());
        if removed > 0 {
            debug!("Purged {} expired entries.", removed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::content::{Clock, Content, ManualClock, MemoryRepository, Mood, Post};
    use crate::logger::LogBuffer;
    use crate::state::Route;
    use crate::ui::Theme;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;
    use std::sync::{mpsc, Arc};

    fn t0() -> DateTime<Utc> {
        Utc.ymd(2024, 3, 1).and_hms(8, 0, 0)
    }

    struct Harness {
        state: State,
        repository: MemoryRepository,
        clock: ManualClock,
        rx: mpsc::Receiver<Event>,
    }

    impl Harness {
        fn new() -> Self {
            let clock = ManualClock::new(t0());
            let (tx, rx) = mpsc::channel();
            let state = State::new(
                tx,
                Arc::new(clock.clone()),
                Duration::milliseconds(2000),
                Settings::default(),
                Theme::default(),
                LogBuffer::new(),
            );
            Harness {
                state,
                repository: MemoryRepository::default(),
                clock,
                rx,
            }
        }

        /// Apply every queued event, including those queued while handling.
        fn drain(&mut self) {
            while let Ok(event) = self.rx.try_recv() {
                Handler::new(&mut self.state, &mut self.repository)
                    .handle(event)
                    .unwrap();
            }
        }

        fn seed(&mut self, mood: &str) -> Post {
            let text: String = Sentence(3..8).fake();
            self.repository
                .create_post(
                    PostDraft {
                        mood: mood.to_string(),
                        content: Content::Text(text),
                        circle_id: None,
                    },
                    self.clock.now(),
                )
                .unwrap()
        }
    }

    #[test]
    fn publishing_navigates_home_with_post_in_feed() {
        let mut h = Harness::new();
        h.state.navigate(Screen::Create, Payload::none());
        h.state
            .get_compose_mut()
            .next_mood()
            .next_mood()
            .set_body("Today I smiled");
        h.state.submit_compose();
        h.drain();
        assert_eq!(h.state.current_screen(), Screen::Home);
        assert_eq!(h.state.get_feed().len(), 1);
        assert_eq!(h.state.get_feed()[0].mood(), Mood::Hopeful);
        assert_eq!(h.state.get_stats().posts_shared(), 1);
    }

    #[test]
    fn missing_mood_reprompts() {
        let mut h = Harness::new();
        h.state.navigate(Screen::Create, Payload::none());
        h.state.get_compose_mut().set_body("no mood chosen");
        h.state.submit_compose();
        h.drain();
        assert_eq!(h.state.current_screen(), Screen::Create);
        assert_eq!(
            h.state.get_compose().error(),
            Some("Pick a mood before sharing.")
        );
        assert!(h.repository.feed(h.clock.now()).is_empty());
    }

    #[test]
    fn blank_content_reprompts() {
        let mut h = Harness::new();
        h.state.navigate(Screen::Create, Payload::none());
        h.state.get_compose_mut().next_mood().set_body("   ");
        h.state.submit_compose();
        h.drain();
        assert_eq!(h.state.current_screen(), Screen::Create);
        assert_eq!(
            h.state.get_compose().error(),
            Some("Write something before sharing.")
        );
    }

    #[test]
    fn daily_unload_posts_neutral() {
        let mut h = Harness::new();
        h.state.navigate(Screen::DailyUnload, Payload::none());
        h.state.get_compose_mut().set_body("Letting it all out");
        h.state.submit_compose();
        h.drain();
        assert_eq!(h.state.current_screen(), Screen::Home);
        assert_eq!(h.state.get_feed()[0].mood(), Mood::Neutral);
    }

    #[test]
    fn reply_returns_to_refreshed_parent() {
        let mut h = Harness::new();
        let parent = h.seed("lonely");
        h.state.navigate(Screen::Reply, Payload::post(parent.clone()));
        h.state
            .get_compose_mut()
            .next_mood()
            .set_body("You are not alone");
        h.state.submit_compose();
        h.drain();
        assert_eq!(h.state.current_screen(), Screen::PostDetail);
        match h.state.current_route() {
            Route::PostDetail(post) => {
                assert_eq!(post.id(), parent.id());
                assert_eq!(post.reply_count(), 1);
            }
            other => panic!("unexpected route {:?}", other),
        }
        assert_eq!(h.state.get_replies().len(), 1);
        assert_eq!(h.state.get_stats().echoes_sent(), 1);
    }

    #[test]
    fn reply_to_expired_parent_reprompts() {
        let mut h = Harness::new();
        let parent = h.seed("anxious");
        h.state.navigate(Screen::Reply, Payload::post(parent));
        h.state.get_compose_mut().next_mood().set_body("too late");
        h.clock.advance(Duration::hours(24));
        h.state.submit_compose();
        h.drain();
        assert_eq!(h.state.current_screen(), Screen::Reply);
        assert_eq!(
            h.state.get_compose().error(),
            Some("This soul has already vanished.")
        );
    }

    #[test]
    fn empathy_updates_feed_and_stats() {
        let mut h = Harness::new();
        h.seed("grateful");
        h.state.navigate(Screen::Home, Payload::none());
        h.drain();
        h.state.next_item().empathize_selected_post();
        h.drain();
        assert_eq!(h.state.get_feed()[0].empathy_count(), 1);
        assert_eq!(h.state.get_stats().empathy_given(), 1);
    }

    #[test]
    fn expired_posts_leave_the_feed() {
        let mut h = Harness::new();
        h.seed("hopeful");
        h.clock.advance(Duration::hours(24) - Duration::seconds(1));
        h.state.navigate(Screen::Home, Payload::none());
        h.drain();
        assert_eq!(h.state.get_feed().len(), 1);
        h.clock.advance(Duration::seconds(1));
        h.state.navigate(Screen::Home, Payload::none());
        h.drain();
        assert!(h.state.get_feed().is_empty());
    }

    #[test]
    fn circle_post_returns_to_circle_feed() {
        let mut h = Harness::new();
        let circle = h.repository.lookup_circle(CircleId(4)).unwrap();
        h.state.navigate(Screen::CircleFeed, Payload::circle(circle));
        h.state.compose_in_circle();
        h.state.get_compose_mut().next_mood().set_body("Starting over");
        h.state.submit_compose();
        h.drain();
        assert_eq!(h.state.current_screen(), Screen::CircleFeed);
        assert_eq!(h.state.get_circle_feed().len(), 1);
    }

    #[test]
    fn pulse_reflects_visible_posts() {
        let mut h = Harness::new();
        h.seed("anxious");
        h.seed("anxious");
        h.seed("grateful");
        h.state.navigate(Screen::MoodPulse, Payload::none());
        h.drain();
        assert_eq!(h.state.get_pulse().total(), 3);
        assert_eq!(h.state.get_pulse().dominant(), Some(Mood::Anxious));
    }
}
