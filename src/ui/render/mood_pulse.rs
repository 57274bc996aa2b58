use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

const BAR_HEIGHT: u16 = 2;

/// Render the live mood distribution as one bar per mood.
///
pub fn mood_pulse(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let pulse = state.get_pulse();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("How {} souls feel right now", pulse.total()))
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    if pulse.shares().is_empty() {
        frame.render_widget(
            Paragraph::new("No souls have shared yet. The pulse is quiet.")
                .style(styling::muted_text_style(theme))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let mut constraints: Vec<Constraint> = pulse
        .shares()
        .iter()
        .map(|_| Constraint::Length(BAR_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (share, area) in pulse.shares().iter().zip(rows.iter()) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(*area);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(share.mood.label(), styling::mood_style(theme, share.mood)),
                Span::styled(
                    format!("  {} posts", share.count),
                    styling::muted_text_style(theme),
                ),
            ])),
            parts[0],
        );
        let gauge = Gauge::default()
            .gauge_style(styling::mood_style(theme, share.mood))
            .percent(u16::from(share.percentage))
            .label(format!("{}%", share.percentage));
        frame.render_widget(gauge, parts[1]);
    }
}
