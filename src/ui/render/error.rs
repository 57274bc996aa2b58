use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the lost-soul screen shown for unknown destinations.
///
pub fn error(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(30), Constraint::Min(6)])
        .margin(2)
        .split(size);

    let mut lines = vec![
        Line::from(Span::styled("👻  404", styling::banner_style(theme))),
        Line::from(""),
        Line::from(Span::styled(
            "Lost in the Void",
            styling::active_block_title_style(theme),
        )),
        Line::from(Span::styled(
            "This soul seems to have vanished.",
            styling::secondary_text_style(theme),
        )),
    ];
    if let Some(error) = state.get_router().last_error() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.to_string(),
            styling::muted_text_style(theme),
        )));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[1],
    );
}
