use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the ghost identity and this session's activity.
///
pub fn profile(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(size);

    let mode = if state.get_settings().ghost_mode {
        "Ghost mode on"
    } else {
        "Ghost mode off"
    };
    let identity = vec![
        Line::from(Span::styled("👻", styling::banner_style(theme))),
        Line::from(Span::styled(
            state.get_ghost().name(),
            styling::active_block_title_style(theme),
        )),
        Line::from(Span::styled(mode, styling::secondary_style(theme))),
    ];
    frame.render_widget(
        Paragraph::new(identity)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(
                styling::active_block_border_style(theme),
            )),
        rows[0],
    );

    let stats = state.get_stats();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);
    let cells = [
        ("Posts Shared", stats.posts_shared()),
        ("Echoes Sent", stats.echoes_sent()),
        ("Souls Touched", stats.empathy_given()),
    ];
    for ((label, value), area) in cells.iter().zip(columns.iter()) {
        let lines = vec![
            Line::from(Span::styled(value.to_string(), styling::accent_style(theme))),
            Line::from(Span::styled(*label, styling::secondary_text_style(theme))),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styling::normal_block_border_style(theme)),
            ),
            *area,
        );
    }

    frame.render_widget(
        Paragraph::new("Nothing here is tied to you. Your identity resets when you leave.")
            .style(styling::muted_text_style(theme))
            .alignment(Alignment::Center),
        rows[2],
    );
}
