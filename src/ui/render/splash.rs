use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

pub const BANNER: &str = r"
   ____              _ ____
  / ___|  ___  _   _| / ___| _ __   __ _  ___ ___
  \___ \ / _ \| | | | \___ \| '_ \ / _` |/ __/ _ \
   ___) | (_) | |_| | |___) | |_) | (_| | (_|  __/
  |____/ \___/ \__,_|_|____/| .__/ \__,_|\___\___|
                            |_|
";

const TAGLINE: &str = "Share your soul. Anonymously. For 24 hours.";

/// Render the splash banner.
///
pub fn splash(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(8),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .margin(1)
        .split(size);

    let mut banner = Text::from(BANNER);
    banner = banner.patch_style(styling::banner_style(theme));
    frame.render_widget(
        Paragraph::new(banner).alignment(Alignment::Center),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(TAGLINE)
            .style(styling::secondary_text_style(theme))
            .alignment(Alignment::Center),
        rows[2],
    );
}
