mod circles;
mod compose;
mod error;
mod feed;
mod footer;
mod info;
mod log;
mod mood_pulse;
mod onboarding;
mod post_detail;
mod profile;
mod settings;
mod splash;

use super::Frame;
use crate::state::{Screen, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

const LOG_PANEL_HEIGHT: u16 = 10;

/// Render the current screen according to state.
///
pub fn render(frame: &mut Frame, state: &mut State) {
    let mut constraints = vec![
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ];
    if state.is_log_shown() {
        constraints.push(Constraint::Length(LOG_PANEL_HEIGHT));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    header(frame, rows[0], state);
    body(frame, rows[1], state);
    footer::footer(frame, rows[2], state);
    if state.is_log_shown() {
        self::log::log(frame, rows[3], state);
    }
}

fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let line = Line::from(vec![
        Span::styled(" 👻 ", styling::banner_style(theme)),
        Span::styled(
            state.current_screen().title(),
            styling::active_block_title_style(theme),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}

fn body(frame: &mut Frame, size: Rect, state: &mut State) {
    match state.current_screen() {
        Screen::Splash => splash::splash(frame, size, state),
        Screen::Onboarding => onboarding::onboarding(frame, size, state),
        Screen::Home => feed::home(frame, size, state),
        Screen::Create | Screen::Reply | Screen::DailyUnload => {
            compose::compose(frame, size, state)
        }
        Screen::PostDetail => post_detail::post_detail(frame, size, state),
        Screen::Circles => circles::circles(frame, size, state),
        Screen::CircleFeed => feed::circle_feed(frame, size, state),
        Screen::Profile => profile::profile(frame, size, state),
        Screen::MoodPulse => mood_pulse::mood_pulse(frame, size, state),
        Screen::Settings => settings::settings(frame, size, state),
        Screen::Help => info::help(frame, size, state),
        Screen::Legal => info::legal(frame, size, state),
        Screen::Error => error::error(frame, size, state),
    }
}
