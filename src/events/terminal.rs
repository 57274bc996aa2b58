use crate::state::{Payload, Screen, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => {
                    if let Ok(CrosstermEvent::Key(key)) = event::read() {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => (),
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(key, state)),
            Event::Tick => {
                state.tick();
                Ok(true)
            }
        }
    }
}

/// Apply a key press to state. Returns false if exit was requested.
///
pub fn handle_key(key: KeyEvent, state: &mut State) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyEvent {
            code: KeyCode::F(2),
            ..
        } => {
            state.toggle_log();
            return true;
        }
        _ => (),
    }
    match state.current_screen() {
        Screen::Create | Screen::Reply | Screen::DailyUnload => {
            compose_key(key, state);
            true
        }
        screen => browse_key(key, screen, state),
    }
}

/// Handle keys on the composer screens, where plain characters are text.
///
fn compose_key(key: KeyEvent, state: &mut State) {
    let screen = state.current_screen();
    match key {
        KeyEvent {
            code: KeyCode::Esc, ..
        } => {
            debug!("Cancelling composer on '{}'.", screen);
            state.back();
        }
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            state.submit_compose();
        }
        KeyEvent {
            code: KeyCode::Char('t'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } if screen != Screen::DailyUnload => {
            state.get_compose_mut().cycle_input_mode();
        }
        KeyEvent {
            code: KeyCode::Tab, ..
        } => {
            if screen == Screen::DailyUnload {
                state.next_daily_prompt();
            } else {
                state.get_compose_mut().next_mood();
            }
        }
        KeyEvent {
            code: KeyCode::BackTab,
            ..
        } if screen != Screen::DailyUnload => {
            state.get_compose_mut().previous_mood();
        }
        _ => {
            state.get_compose_mut().input(key);
        }
    }
}

/// Handle keys on every screen without a text input.
///
fn browse_key(key: KeyEvent, screen: Screen, state: &mut State) -> bool {
    match (screen, key.code) {
        (_, KeyCode::Char('q')) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        (Screen::Splash, KeyCode::Enter) => {
            state.navigate(Screen::Onboarding, Payload::none());
        }
        (Screen::Onboarding, KeyCode::Right | KeyCode::Enter) => {
            state.next_onboarding_slide();
        }
        (Screen::Onboarding, KeyCode::Char('s')) => {
            state.navigate(Screen::Home, Payload::none());
        }
        (Screen::Error, KeyCode::Enter) => {
            state.navigate(Screen::Home, Payload::none());
        }
        (Screen::Error, KeyCode::Char('R')) => {
            state.reset();
        }
        (Screen::Home | Screen::CircleFeed, KeyCode::Enter) => {
            state.open_selected_post();
        }
        (Screen::Home | Screen::CircleFeed, KeyCode::Char('e')) => {
            state.empathize_selected_post();
        }
        (Screen::Home | Screen::CircleFeed, KeyCode::Char('r')) => {
            state.reply_to_selected_post();
        }
        (Screen::Home, KeyCode::Char('n')) => {
            state.navigate(Screen::Create, Payload::none());
        }
        (Screen::CircleFeed, KeyCode::Char('n')) => {
            state.compose_in_circle();
        }
        (Screen::Home, KeyCode::Char('u')) => {
            state.navigate(Screen::DailyUnload, Payload::none());
        }
        (Screen::Home, KeyCode::Char('c')) => {
            state.navigate(Screen::Circles, Payload::none());
        }
        (Screen::Home, KeyCode::Char('m')) => {
            state.navigate(Screen::MoodPulse, Payload::none());
        }
        (Screen::Home, KeyCode::Char('p')) => {
            state.navigate(Screen::Profile, Payload::none());
        }
        (Screen::PostDetail, KeyCode::Char('e')) => {
            state.empathize_selected_post();
        }
        (Screen::PostDetail, KeyCode::Char('E')) => {
            state.empathize_selected_reply();
        }
        (Screen::PostDetail, KeyCode::Char('r')) => {
            state.navigate(Screen::Reply, Payload::none());
        }
        (Screen::Circles, KeyCode::Enter) => {
            state.open_selected_circle();
        }
        (Screen::Profile, KeyCode::Char(',')) => {
            state.navigate(Screen::Settings, Payload::none());
        }
        (Screen::Settings, KeyCode::Enter | KeyCode::Char(' ')) => {
            state.toggle_selected_setting();
        }
        (Screen::Settings, KeyCode::Char('h')) => {
            state.navigate(Screen::Help, Payload::none());
        }
        (Screen::Settings, KeyCode::Char('l')) => {
            state.navigate(Screen::Legal, Payload::none());
        }
        (_, KeyCode::Char('j') | KeyCode::Down) => {
            state.next_item();
        }
        (_, KeyCode::Char('k') | KeyCode::Up) => {
            state.previous_item();
        }
        (Screen::Splash | Screen::Onboarding | Screen::Error, KeyCode::Esc) => (),
        (_, KeyCode::Esc) => {
            state.back();
        }
        _ => (),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::content::{ManualClock, Mood, Post};
    use crate::events::content::Event as ContentEvent;
    use crate::logger::LogBuffer;
    use crate::state::ComposeKind;
    use crate::ui::Theme;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::sync::Arc;

    fn t0() -> DateTime<Utc> {
        Utc.ymd(2024, 3, 1).and_hms(8, 0, 0)
    }

    fn state() -> (State, mpsc::Receiver<ContentEvent>) {
        let (tx, rx) = mpsc::channel();
        let state = State::new(
            tx,
            Arc::new(ManualClock::new(t0())),
            Duration::milliseconds(2000),
            Settings::default(),
            Theme::default(),
            LogBuffer::new(),
        );
        (state, rx)
    }

    fn press(state: &mut State, code: KeyCode) -> bool {
        handle_key(KeyEvent::new(code, KeyModifiers::NONE), state)
    }

    fn ctrl(state: &mut State, c: char) -> bool {
        handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL), state)
    }

    #[test]
    fn ctrl_c_always_quits() {
        let (mut state, _) = state();
        state.navigate(Screen::Create, Payload::none());
        assert!(!ctrl(&mut state, 'c'));
    }

    #[test]
    fn q_quits_outside_composers_only() {
        let (mut state, _) = state();
        state.navigate(Screen::Home, Payload::none());
        assert!(!press(&mut state, KeyCode::Char('q')));
        state.navigate(Screen::Create, Payload::none());
        assert!(press(&mut state, KeyCode::Char('q')));
        assert_eq!(state.get_compose().body(), "q");
    }

    #[test]
    fn onboarding_flow_reaches_home() {
        let (mut state, _) = state();
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.current_screen(), Screen::Onboarding);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.current_screen(), Screen::Home);
    }

    #[test]
    fn onboarding_skip() {
        let (mut state, _) = state();
        state.navigate(Screen::Onboarding, Payload::none());
        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.current_screen(), Screen::Home);
    }

    #[test]
    fn home_shortcuts() {
        let cases = [
            ('n', Screen::Create),
            ('u', Screen::DailyUnload),
            ('c', Screen::Circles),
            ('m', Screen::MoodPulse),
            ('p', Screen::Profile),
        ];
        for (key, screen) in cases {
            let (mut state, _) = state();
            state.navigate(Screen::Home, Payload::none());
            press(&mut state, KeyCode::Char(key));
            assert_eq!(state.current_screen(), screen);
        }
    }

    #[test]
    fn reply_key_without_selection_stays_home() {
        let (mut state, _) = state();
        state.navigate(Screen::Home, Payload::none());
        press(&mut state, KeyCode::Char('r'));
        assert_eq!(state.current_screen(), Screen::Home);
    }

    #[test]
    fn open_and_reply_to_selected_post() {
        let (mut state, _) = state();
        state.navigate(Screen::Home, Payload::none());
        let post = Post::new(Mood::Lonely, "anyone awake?".into(), None, t0()).unwrap();
        state.set_feed(vec![post]);
        press(&mut state, KeyCode::Char('j'));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.current_screen(), Screen::PostDetail);
        press(&mut state, KeyCode::Char('r'));
        assert_eq!(state.current_screen(), Screen::Reply);
        assert_eq!(state.get_compose().kind(), ComposeKind::Reply);
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.current_screen(), Screen::PostDetail);
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.current_screen(), Screen::Home);
    }

    #[test]
    fn composer_keys() {
        let (mut state, rx) = state();
        state.navigate(Screen::Create, Payload::none());
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Tab);
        handle_key(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            &mut state,
        );
        assert_eq!(state.get_compose().selected_mood(), Some(Mood::Anxious));
        for c in "hello".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        ctrl(&mut state, 't');
        ctrl(&mut state, 's');
        match rx.try_iter().last() {
            Some(ContentEvent::CreatePost(draft)) => {
                assert_eq!(draft.mood, "anxious");
                assert_eq!(
                    draft.content,
                    crate::content::Content::Voice {
                        transcript: "hello".to_string()
                    }
                );
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn error_screen_recovery() {
        let (mut state, _) = state();
        state.navigate_to("nowhere", Payload::none());
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.current_screen(), Screen::Home);

        state.navigate_to("nowhere", Payload::none());
        handle_key(
            KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT),
            &mut state,
        );
        assert_eq!(state.current_screen(), Screen::Splash);
    }

    #[test]
    fn settings_navigation() {
        let (mut state, _) = state();
        state.navigate(Screen::Profile, Payload::none());
        press(&mut state, KeyCode::Char(','));
        assert_eq!(state.current_screen(), Screen::Settings);
        press(&mut state, KeyCode::Char('h'));
        assert_eq!(state.current_screen(), Screen::Help);
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Char('l'));
        assert_eq!(state.current_screen(), Screen::Legal);
        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.current_screen(), Screen::Profile);
    }

    #[test]
    fn f2_toggles_log() {
        let (mut state, _) = state();
        press(&mut state, KeyCode::F(2));
        assert!(state.is_log_shown());
        press(&mut state, KeyCode::F(2));
        assert!(!state.is_log_shown());
    }

    #[test]
    fn key_releases_are_ignored() {
        let (mut state, _) = state();
        let mut key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key(key, &mut state);
        assert_eq!(state.current_screen(), Screen::Splash);
    }
}
