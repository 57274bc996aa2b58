use crate::app::ContentEventSender;
use crate::config::Settings;
use crate::content::{
    next_prompt, CircleId, CircleRegistry, Clock, Ephemeral, MoodPulse, Post, PostDraft, Reply,
    ReplyDraft, SystemClock, DAILY_PROMPTS,
};
use crate::events::content::Event as ContentEvent;
use crate::ghost::{Ghost, SessionStats};
use crate::logger::LogBuffer;
use crate::ui::Theme;
use chrono::{DateTime, Duration, Utc};
use log::*;
use ratatui::widgets::ListState;
use std::sync::Arc;

use super::form::{ComposeForm, ComposeKind};
use super::navigation::{Payload, Route, Screen};
use super::router::Router;
use super::splash::{SplashTimer, DEFAULT_SPLASH_DELAY_IN_MS};

/// Number of slides on the onboarding screen.
///
pub const ONBOARDING_SLIDE_COUNT: usize = 3;

/// Specifying the rows of the settings screen.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SettingsItem {
    GhostMode,
    Notifications,
    BlurPreviews,
    SoundEffects,
    Theme,
}

impl SettingsItem {
    pub const ALL: [SettingsItem; 5] = [
        SettingsItem::GhostMode,
        SettingsItem::Notifications,
        SettingsItem::BlurPreviews,
        SettingsItem::SoundEffects,
        SettingsItem::Theme,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsItem::GhostMode => "Ghost Mode",
            SettingsItem::Notifications => "Notifications",
            SettingsItem::BlurPreviews => "Blur Previews",
            SettingsItem::SoundEffects => "Sound Effects",
            SettingsItem::Theme => "Theme",
        }
    }
}

/// Houses data representative of application state.
///
pub struct State {
    content_sender: Option<ContentEventSender>,
    clock: Arc<dyn Clock>,
    router: Router,
    feed: Vec<Post>,
    circle_feed: Vec<Post>,
    replies: Vec<Reply>,
    pulse: MoodPulse,
    feed_list_state: ListState,
    circle_feed_list_state: ListState,
    replies_list_state: ListState,
    circles_list_state: ListState,
    settings_list_state: ListState,
    compose: ComposeForm,
    compose_circle: Option<CircleId>,
    onboarding_slide: usize,
    prompt_index: usize,
    settings: Settings,
    theme: Theme,
    ghost: Ghost,
    stats: SessionStats,
    show_log: bool,
    log_buffer: LogBuffer,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        State::with_clock(clock, default_splash_delay())
    }
}

fn default_splash_delay() -> Duration {
    Duration::milliseconds(DEFAULT_SPLASH_DELAY_IN_MS as i64)
}

impl State {
    /// Return a state wired to the content event queue.
    ///
    pub fn new(
        content_sender: ContentEventSender,
        clock: Arc<dyn Clock>,
        splash_delay: Duration,
        settings: Settings,
        theme: Theme,
        log_buffer: LogBuffer,
    ) -> Self {
        State {
            content_sender: Some(content_sender),
            settings,
            theme,
            log_buffer,
            ..State::with_clock(clock, splash_delay)
        }
    }

    /// Return a detached state reading time from the given clock.
    ///
    pub fn with_clock(clock: Arc<dyn Clock>, splash_delay: Duration) -> Self {
        let now = clock.now();
        State {
            content_sender: None,
            router: Router::new(
                CircleRegistry::builtin(),
                SplashTimer::new(splash_delay),
                now,
            ),
            clock,
            feed: vec![],
            circle_feed: vec![],
            replies: vec![],
            pulse: MoodPulse::default(),
            feed_list_state: ListState::default(),
            circle_feed_list_state: ListState::default(),
            replies_list_state: ListState::default(),
            circles_list_state: ListState::default(),
            settings_list_state: ListState::default(),
            compose: ComposeForm::new(ComposeKind::Post),
            compose_circle: None,
            onboarding_slide: 0,
            prompt_index: 0,
            settings: Settings::default(),
            theme: Theme::default(),
            ghost: Ghost::summon(),
            stats: SessionStats::default(),
            show_log: false,
            log_buffer: LogBuffer::new(),
        }
    }

    /// Return the current instant according to the state's clock.
    ///
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn get_router(&self) -> &Router {
        &self.router
    }

    /// Return the screen currently shown.
    ///
    pub fn current_screen(&self) -> Screen {
        self.router.current_screen()
    }

    pub fn current_route(&self) -> &Route {
        self.router.route()
    }

    /// Navigate to a screen by id and prepare the screen that is shown.
    ///
    pub fn navigate_to(&mut self, id: &str, payload: Payload) -> Screen {
        let now = self.now();
        let shown = self.router.navigate_to(id, payload, now);
        self.enter(shown);
        shown
    }

    /// Navigate to a screen and prepare the screen that is shown.
    ///
    pub fn navigate(&mut self, screen: Screen, payload: Payload) -> Screen {
        let now = self.now();
        let shown = self.router.navigate(screen, payload, now);
        self.enter(shown);
        shown
    }

    /// Return to the parent of the current screen. A composer opened from a
    /// circle feed returns to that circle.
    ///
    pub fn back(&mut self) -> Screen {
        let now = self.now();
        let circle = match (self.current_screen(), self.compose_circle) {
            (Screen::Create, Some(id)) => self.router.registry().lookup(id).ok().cloned(),
            _ => None,
        };
        let shown = match circle {
            Some(circle) => self
                .router
                .navigate(Screen::CircleFeed, Payload::circle(circle), now),
            None => self.router.back(now),
        };
        self.enter(shown);
        shown
    }

    /// Advance time-driven state. Returns true if the screen changed.
    ///
    pub fn tick(&mut self) -> bool {
        let now = self.now();
        self.drop_expired(now);
        if self.router.tick(now) {
            let shown = self.current_screen();
            self.enter(shown);
            return true;
        }
        false
    }

    /// Drop cached content that expired while its screen was shown.
    ///
    fn drop_expired(&mut self, now: DateTime<Utc>) {
        self.feed.retain(|post| !post.is_expired(now));
        clamp_selection(&mut self.feed_list_state, self.feed.len());
        self.circle_feed.retain(|post| !post.is_expired(now));
        clamp_selection(&mut self.circle_feed_list_state, self.circle_feed.len());
        self.replies.retain(|reply| !reply.is_expired(now));
        clamp_selection(&mut self.replies_list_state, self.replies.len());
    }

    /// Re-initialize navigation to the splash screen.
    ///
    pub fn reset(&mut self) -> &mut Self {
        let now = self.now();
        self.router.reset(now);
        self.enter(Screen::Splash);
        self
    }

    /// Prepare per-screen state and request the data the screen renders.
    ///
    fn enter(&mut self, screen: Screen) {
        match screen {
            Screen::Onboarding => self.onboarding_slide = 0,
            Screen::Home => {
                self.dispatch(ContentEvent::Purge);
                self.dispatch(ContentEvent::RefreshFeed);
            }
            Screen::Create => {
                self.compose = ComposeForm::new(ComposeKind::Post);
                self.compose_circle = None;
            }
            Screen::PostDetail => {
                if let Route::PostDetail(post) = self.router.route() {
                    let post_id = post.id();
                    self.replies_list_state.select(None);
                    self.dispatch(ContentEvent::LoadReplies { post_id });
                }
            }
            Screen::Reply => self.compose = ComposeForm::new(ComposeKind::Reply),
            Screen::CircleFeed => {
                if let Route::CircleFeed(circle) = self.router.route() {
                    let circle_id = circle.id;
                    self.circle_feed_list_state.select(None);
                    self.dispatch(ContentEvent::RefreshCircleFeed { circle_id });
                }
            }
            Screen::MoodPulse => self.dispatch(ContentEvent::RefreshPulse),
            Screen::DailyUnload => self.compose = ComposeForm::new(ComposeKind::DailyUnload),
            _ => (),
        }
    }

    /// Compose a post filed into the circle currently shown.
    ///
    pub fn compose_in_circle(&mut self) -> Screen {
        let circle_id = match self.router.route() {
            Route::CircleFeed(circle) => Some(circle.id),
            _ => None,
        };
        let shown = self.navigate(Screen::Create, Payload::none());
        self.compose_circle = circle_id;
        shown
    }

    pub fn get_compose_circle(&self) -> Option<CircleId> {
        self.compose_circle
    }

    pub fn get_compose(&self) -> &ComposeForm {
        &self.compose
    }

    pub fn get_compose_mut(&mut self) -> &mut ComposeForm {
        &mut self.compose
    }

    /// Queue the composed content for publishing.
    ///
    pub fn submit_compose(&mut self) -> &mut Self {
        let event = match self.compose.kind() {
            ComposeKind::Post | ComposeKind::DailyUnload => ContentEvent::CreatePost(PostDraft {
                mood: self.compose.mood_tag(),
                content: self.compose.content(),
                circle_id: self.compose_circle,
            }),
            ComposeKind::Reply => match self.router.route() {
                Route::Reply(post) => ContentEvent::CreateReply(ReplyDraft {
                    parent_post_id: post.id(),
                    mood: self.compose.mood_tag(),
                    content: self.compose.content(),
                }),
                _ => {
                    warn!("Skipping reply submission outside of the reply screen.");
                    return self;
                }
            },
        };
        self.dispatch(event);
        self
    }

    /// Return the general feed.
    ///
    pub fn get_feed(&self) -> &[Post] {
        &self.feed
    }

    /// Set the general feed, keeping the selection within bounds.
    ///
    pub fn set_feed(&mut self, feed: Vec<Post>) -> &mut Self {
        clamp_selection(&mut self.feed_list_state, feed.len());
        self.feed = feed;
        self
    }

    pub fn get_circle_feed(&self) -> &[Post] {
        &self.circle_feed
    }

    pub fn set_circle_feed(&mut self, feed: Vec<Post>) -> &mut Self {
        clamp_selection(&mut self.circle_feed_list_state, feed.len());
        self.circle_feed = feed;
        self
    }

    pub fn get_replies(&self) -> &[Reply] {
        &self.replies
    }

    pub fn set_replies(&mut self, replies: Vec<Reply>) -> &mut Self {
        clamp_selection(&mut self.replies_list_state, replies.len());
        self.replies = replies;
        self
    }

    /// Replace a reply with a newer snapshot of itself.
    ///
    pub fn update_reply(&mut self, reply: Reply) -> &mut Self {
        if let Some(existing) = self.replies.iter_mut().find(|r| r.id() == reply.id()) {
            *existing = reply;
        }
        self
    }

    /// Replace every cached copy of a post with a newer snapshot.
    ///
    pub fn update_post(&mut self, post: Post) -> &mut Self {
        for list in [&mut self.feed, &mut self.circle_feed] {
            if let Some(existing) = list.iter_mut().find(|p| p.id() == post.id()) {
                *existing = post.clone();
            }
        }
        self.router.refresh_post(&post);
        self
    }

    pub fn get_pulse(&self) -> &MoodPulse {
        &self.pulse
    }

    pub fn set_pulse(&mut self, pulse: MoodPulse) -> &mut Self {
        self.pulse = pulse;
        self
    }

    pub fn get_feed_list_state(&mut self) -> &mut ListState {
        &mut self.feed_list_state
    }

    pub fn get_circle_feed_list_state(&mut self) -> &mut ListState {
        &mut self.circle_feed_list_state
    }

    pub fn get_replies_list_state(&mut self) -> &mut ListState {
        &mut self.replies_list_state
    }

    pub fn get_circles_list_state(&mut self) -> &mut ListState {
        &mut self.circles_list_state
    }

    pub fn get_settings_list_state(&mut self) -> &mut ListState {
        &mut self.settings_list_state
    }

    /// Move the selection of the list shown on the current screen down.
    ///
    pub fn next_item(&mut self) -> &mut Self {
        let screen = self.current_screen();
        let len = self.list_len(screen);
        if let Some(list_state) = self.list_state_for(screen) {
            select_next(list_state, len);
        }
        self
    }

    /// Move the selection of the list shown on the current screen up.
    ///
    pub fn previous_item(&mut self) -> &mut Self {
        let screen = self.current_screen();
        let len = self.list_len(screen);
        if let Some(list_state) = self.list_state_for(screen) {
            select_previous(list_state, len);
        }
        self
    }

    fn list_len(&self, screen: Screen) -> usize {
        match screen {
            Screen::Home => self.feed.len(),
            Screen::CircleFeed => self.circle_feed.len(),
            Screen::PostDetail => self.replies.len(),
            Screen::Circles => self.router.registry().all().len(),
            Screen::Settings => SettingsItem::ALL.len(),
            _ => 0,
        }
    }

    fn list_state_for(&mut self, screen: Screen) -> Option<&mut ListState> {
        match screen {
            Screen::Home => Some(&mut self.feed_list_state),
            Screen::CircleFeed => Some(&mut self.circle_feed_list_state),
            Screen::PostDetail => Some(&mut self.replies_list_state),
            Screen::Circles => Some(&mut self.circles_list_state),
            Screen::Settings => Some(&mut self.settings_list_state),
            _ => None,
        }
    }

    /// Return the post selected on the current feed screen.
    ///
    pub fn get_selected_post(&self) -> Option<&Post> {
        match self.current_screen() {
            Screen::Home => selected(&self.feed, &self.feed_list_state),
            Screen::CircleFeed => selected(&self.circle_feed, &self.circle_feed_list_state),
            Screen::PostDetail | Screen::Reply => self.router.state().post(),
            _ => None,
        }
    }

    pub fn get_selected_reply(&self) -> Option<&Reply> {
        selected(&self.replies, &self.replies_list_state)
    }

    pub fn get_selected_settings_item(&self) -> Option<SettingsItem> {
        self.settings_list_state
            .selected()
            .and_then(|index| SettingsItem::ALL.get(index))
            .copied()
    }

    /// Open the selected post on the post detail screen.
    ///
    pub fn open_selected_post(&mut self) -> Screen {
        match self.get_selected_post().cloned() {
            Some(post) => self.navigate(Screen::PostDetail, Payload::post(post)),
            None => self.current_screen(),
        }
    }

    /// Open the reply composer for the selected post.
    ///
    pub fn reply_to_selected_post(&mut self) -> Screen {
        match self.get_selected_post().cloned() {
            Some(post) => self.navigate(Screen::Reply, Payload::post(post)),
            None => self.current_screen(),
        }
    }

    /// Open the feed of the selected circle.
    ///
    pub fn open_selected_circle(&mut self) -> Screen {
        let circle = self
            .circles_list_state
            .selected()
            .and_then(|index| self.router.registry().all().get(index).cloned());
        match circle {
            Some(circle) => self.navigate(Screen::CircleFeed, Payload::circle(circle)),
            None => self.current_screen(),
        }
    }

    /// Queue empathy for the selected post.
    ///
    pub fn empathize_selected_post(&mut self) -> &mut Self {
        if let Some(id) = self.get_selected_post().map(|post| post.id()) {
            self.dispatch(ContentEvent::EmpathizePost { id });
        }
        self
    }

    /// Queue empathy for the selected reply.
    ///
    pub fn empathize_selected_reply(&mut self) -> &mut Self {
        if let Some(id) = self.get_selected_reply().map(|reply| reply.id()) {
            self.dispatch(ContentEvent::EmpathizeReply { id });
        }
        self
    }

    pub fn get_onboarding_slide(&self) -> usize {
        self.onboarding_slide
    }

    /// Advance to the next onboarding slide, or home after the last one.
    ///
    pub fn next_onboarding_slide(&mut self) -> Screen {
        if self.onboarding_slide + 1 < ONBOARDING_SLIDE_COUNT {
            self.onboarding_slide += 1;
            return self.current_screen();
        }
        self.navigate(Screen::Home, Payload::none())
    }

    pub fn get_daily_prompt(&self) -> &'static str {
        DAILY_PROMPTS[self.prompt_index % DAILY_PROMPTS.len()]
    }

    /// Rotate to a different daily unload prompt.
    ///
    pub fn next_daily_prompt(&mut self) -> &mut Self {
        self.prompt_index = next_prompt(&mut rand::thread_rng(), self.prompt_index);
        self
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    /// Toggle the selected settings row.
    ///
    pub fn toggle_selected_setting(&mut self) -> &mut Self {
        let item = match self.get_selected_settings_item() {
            Some(item) => item,
            None => return self,
        };
        match item {
            SettingsItem::GhostMode => self.settings.ghost_mode = !self.settings.ghost_mode,
            SettingsItem::Notifications => {
                self.settings.notifications = !self.settings.notifications
            }
            SettingsItem::BlurPreviews => {
                self.settings.blur_previews = !self.settings.blur_previews
            }
            SettingsItem::SoundEffects => {
                self.settings.sound_effects = !self.settings.sound_effects
            }
            SettingsItem::Theme => self.theme = self.theme.next(),
        }
        debug!("Toggled setting '{}'.", item.label());
        self
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_ghost(&self) -> &Ghost {
        &self.ghost
    }

    pub fn get_stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn get_stats_mut(&mut self) -> &mut SessionStats {
        &mut self.stats
    }

    pub fn is_log_shown(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    pub fn get_log_buffer(&self) -> &LogBuffer {
        &self.log_buffer
    }

    /// Send a content event to the queue drained by the main loop.
    ///
    pub fn dispatch(&self, event: ContentEvent) {
        if let Some(content_sender) = &self.content_sender {
            if let Err(err) = content_sender.send(event) {
                error!("Received error from content dispatch: {}", err);
            }
        }
    }
}

fn selected<'a, T>(items: &'a [T], list_state: &ListState) -> Option<&'a T> {
    list_state.selected().and_then(|index| items.get(index))
}

fn clamp_selection(list_state: &mut ListState, len: usize) {
    match list_state.selected() {
        Some(_) if len == 0 => list_state.select(None),
        Some(index) if index >= len => list_state.select(Some(len - 1)),
        _ => (),
    }
}

fn select_next(list_state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let next = match list_state.selected() {
        Some(index) if index + 1 < len => index + 1,
        Some(_) => 0,
        None => 0,
    };
    list_state.select(Some(next));
}

fn select_previous(list_state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let previous = match list_state.selected() {
        Some(index) if index > 0 => index - 1,
        _ => len - 1,
    };
    list_state.select(Some(previous));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ManualClock, Mood};
    use chrono::TimeZone;
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;
    use std::sync::mpsc;

    fn t0() -> DateTime<Utc> {
        Utc.ymd(2024, 3, 1).and_hms(8, 0, 0)
    }

    fn wired() -> (State, ManualClock, mpsc::Receiver<ContentEvent>) {
        let clock = ManualClock::new(t0());
        let (tx, rx) = mpsc::channel();
        let state = State::new(
            tx,
            Arc::new(clock.clone()),
            default_splash_delay(),
            Settings::default(),
            Theme::default(),
            LogBuffer::new(),
        );
        (state, clock, rx)
    }

    fn post() -> Post {
        let text: String = Sentence(3..8).fake();
        Post::new(Mood::Grateful, text.as_str().into(), None, t0()).unwrap()
    }

    #[test]
    fn starts_on_splash() {
        let (state, _, _) = wired();
        assert_eq!(state.current_screen(), Screen::Splash);
    }

    #[test]
    fn tick_advances_splash_after_delay() {
        let (mut state, clock, _) = wired();
        assert!(!state.tick());
        clock.advance(Duration::milliseconds(2000));
        assert!(state.tick());
        assert_eq!(state.current_screen(), Screen::Onboarding);
        assert_eq!(state.get_onboarding_slide(), 0);
    }

    #[test]
    fn entering_home_requests_feed() {
        let (mut state, _, rx) = wired();
        state.navigate(Screen::Home, Payload::none());
        let events: Vec<ContentEvent> = rx.try_iter().collect();
        assert!(events.contains(&ContentEvent::RefreshFeed));
    }

    #[test]
    fn entering_post_detail_requests_replies() {
        let (mut state, _, rx) = wired();
        let post = post();
        state.navigate(Screen::PostDetail, Payload::post(post.clone()));
        let events: Vec<ContentEvent> = rx.try_iter().collect();
        assert_eq!(events, vec![ContentEvent::LoadReplies { post_id: post.id() }]);
    }

    #[test]
    fn tick_drops_posts_that_expire_on_screen() {
        let (mut state, clock, _) = wired();
        state.navigate(Screen::Home, Payload::none());
        let lasting = Post::new(
            Mood::Hopeful,
            "still here".into(),
            None,
            t0() + Duration::hours(1),
        )
        .unwrap();
        state.set_feed(vec![lasting.clone(), post()]);
        state.get_feed_list_state().select(Some(1));

        clock.advance(Duration::hours(24));
        state.tick();
        assert_eq!(state.get_feed(), &[lasting][..]);
        assert_eq!(state.get_feed_list_state().selected(), Some(0));
        assert_eq!(state.current_screen(), Screen::Home);
    }

    #[test]
    fn tick_leaves_post_detail_once_post_expires() {
        let (mut state, clock, rx) = wired();
        state.navigate(Screen::PostDetail, Payload::post(post()));
        clock.advance(Duration::hours(25));
        rx.try_iter().for_each(drop);

        assert!(state.tick());
        assert_eq!(state.current_screen(), Screen::Home);
        let events: Vec<ContentEvent> = rx.try_iter().collect();
        assert!(events.contains(&ContentEvent::RefreshFeed));
    }

    #[test]
    fn cancelling_circle_composer_returns_to_circle() {
        let (mut state, _, _) = wired();
        let circle = state.get_router().registry().all()[2].clone();
        state.navigate(Screen::CircleFeed, Payload::circle(circle.clone()));
        assert_eq!(state.compose_in_circle(), Screen::Create);
        assert_eq!(state.back(), Screen::CircleFeed);
        assert_eq!(state.current_route(), &Route::CircleFeed(circle));

        state.navigate(Screen::Home, Payload::none());
        state.navigate(Screen::Create, Payload::none());
        assert_eq!(state.back(), Screen::Home);
    }

    #[test]
    fn onboarding_ends_at_home() {
        let (mut state, _, _) = wired();
        state.navigate(Screen::Onboarding, Payload::none());
        assert_eq!(state.next_onboarding_slide(), Screen::Onboarding);
        assert_eq!(state.next_onboarding_slide(), Screen::Onboarding);
        assert_eq!(state.get_onboarding_slide(), 2);
        assert_eq!(state.next_onboarding_slide(), Screen::Home);
    }

    #[test]
    fn feed_selection_wraps_and_clamps() {
        let (mut state, _, _) = wired();
        state.navigate(Screen::Home, Payload::none());
        state.set_feed(vec![post(), post(), post()]);
        state.previous_item();
        assert_eq!(state.get_feed_list_state().selected(), Some(2));
        state.next_item();
        assert_eq!(state.get_feed_list_state().selected(), Some(0));
        state.previous_item();
        state.set_feed(vec![post()]);
        assert_eq!(state.get_feed_list_state().selected(), Some(0));
        state.set_feed(vec![]);
        assert_eq!(state.get_feed_list_state().selected(), None);
    }

    #[test]
    fn open_selected_post_carries_payload() {
        let (mut state, _, _) = wired();
        state.navigate(Screen::Home, Payload::none());
        let post = post();
        state.set_feed(vec![post.clone()]);
        assert_eq!(state.open_selected_post(), Screen::Home);
        state.next_item();
        assert_eq!(state.open_selected_post(), Screen::PostDetail);
        assert_eq!(state.current_route(), &Route::PostDetail(post));
    }

    #[test]
    fn submit_reply_targets_route_post() {
        let (mut state, _, rx) = wired();
        let post = post();
        state.navigate(Screen::Reply, Payload::post(post.clone()));
        state.get_compose_mut().next_mood().set_body("You are not alone");
        state.submit_compose();
        let events: Vec<ContentEvent> = rx.try_iter().collect();
        assert_eq!(
            events.last(),
            Some(&ContentEvent::CreateReply(ReplyDraft {
                parent_post_id: post.id(),
                mood: "supportive".to_string(),
                content: "You are not alone".into(),
            }))
        );
    }

    #[test]
    fn compose_in_circle_files_post() {
        let (mut state, _, rx) = wired();
        let circle = CircleRegistry::builtin()
            .lookup(CircleId(3))
            .unwrap()
            .clone();
        state.navigate(Screen::CircleFeed, Payload::circle(circle));
        assert_eq!(state.compose_in_circle(), Screen::Create);
        state.get_compose_mut().next_mood().set_body("3am again");
        state.submit_compose();
        match rx.try_iter().last() {
            Some(ContentEvent::CreatePost(draft)) => {
                assert_eq!(draft.circle_id, Some(CircleId(3)))
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn settings_toggle_selected_row() {
        let (mut state, _, _) = wired();
        state.navigate(Screen::Settings, Payload::none());
        state.toggle_selected_setting();
        assert_eq!(state.get_settings(), &Settings::default());
        state.next_item().next_item().next_item();
        assert_eq!(
            state.get_selected_settings_item(),
            Some(SettingsItem::BlurPreviews)
        );
        state.toggle_selected_setting();
        assert!(state.get_settings().blur_previews);
        state.next_item().next_item();
        let theme = state.get_theme().name.clone();
        state.toggle_selected_setting();
        assert_ne!(state.get_theme().name, theme);
    }

    #[test]
    fn update_post_refreshes_caches() {
        let (mut state, _, _) = wired();
        let mut post = post();
        state.set_feed(vec![post.clone()]);
        state.navigate(Screen::PostDetail, Payload::post(post.clone()));
        post.add_empathy();
        state.update_post(post.clone());
        assert_eq!(state.get_feed()[0].empathy_count(), 1);
        assert_eq!(state.current_route(), &Route::PostDetail(post));
    }

    #[test]
    fn reset_returns_to_splash() {
        let (mut state, _, _) = wired();
        state.navigate_to("nowhere", Payload::none());
        assert_eq!(state.current_screen(), Screen::Error);
        state.reset();
        assert_eq!(state.current_screen(), Screen::Splash);
        assert!(state.get_router().is_splash_pending());
    }
}
