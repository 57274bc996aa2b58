use super::Frame;
use crate::state::{ComposeKind, Route, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the composer for posts, replies and daily unloads.
///
pub fn compose(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let kind = state.get_compose().kind();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(size);

    let context: Vec<Line> = match kind {
        ComposeKind::Post => vec![
            Line::from(Span::styled(
                "How does your soul feel?",
                styling::banner_style(&theme),
            )),
            Line::from(Span::styled(
                "Your words vanish in 24 hours.",
                styling::secondary_text_style(&theme),
            )),
        ],
        ComposeKind::Reply => match state.current_route() {
            Route::Reply(post) => vec![
                Line::from(Span::styled(
                    "Echoing back to",
                    styling::secondary_text_style(&theme),
                )),
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", post.mood().label()),
                        styling::mood_style(&theme, post.mood()),
                    ),
                    Span::styled(
                        post.content().body().to_string(),
                        styling::normal_text_style(&theme),
                    ),
                ]),
            ],
            _ => vec![],
        },
        ComposeKind::DailyUnload => vec![
            Line::from(Span::styled(
                "Today's Sacred Space",
                styling::banner_style(&theme),
            )),
            Line::from(Span::styled(
                state.get_daily_prompt(),
                styling::normal_text_style(&theme),
            )),
        ],
    };
    frame.render_widget(
        Paragraph::new(context).wrap(Wrap { trim: true }),
        rows[0],
    );

    let compose = state.get_compose();
    let selected = compose.selected_mood();
    let mut mood_spans = vec![];
    for mood in compose.moods() {
        let label = format!(" {} ", mood.label());
        if Some(*mood) == selected {
            mood_spans.push(Span::styled(label, styling::highlight_style(&theme)));
        } else {
            mood_spans.push(Span::styled(label, styling::mood_style(&theme, *mood)));
        }
    }
    let mood_block = Block::default()
        .borders(Borders::ALL)
        .title("Mood (Tab / Shift-Tab)")
        .border_style(styling::normal_block_border_style(&theme));
    frame.render_widget(
        Paragraph::new(Line::from(mood_spans)).block(mood_block),
        rows[1],
    );

    let title = format!("{} (Ctrl-t to switch)", compose.input_mode().label());
    let status = match compose.error() {
        Some(error) => Line::from(Span::styled(
            error.to_string(),
            styling::error_style(&theme),
        )),
        None => Line::from(Span::styled(
            "No names. No faces. Just you.",
            styling::muted_text_style(&theme),
        )),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(styling::active_block_border_style(&theme));
    let textarea = state.get_compose_mut().textarea_mut();
    textarea.set_block(block);
    frame.render_widget(textarea.widget(), rows[2]);

    frame.render_widget(Paragraph::new(status), rows[3]);
}
