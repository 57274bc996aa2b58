use super::Frame;
use crate::content::format_count;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the circle catalog.
///
pub fn circles(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let items: Vec<ListItem> = state
        .get_router()
        .registry()
        .all()
        .iter()
        .map(|circle| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    circle.name.clone(),
                    styling::banner_style(&theme),
                )),
                Line::from(Span::styled(
                    circle.description.clone(),
                    styling::secondary_text_style(&theme),
                )),
                Line::from(vec![
                    Span::styled(
                        format!("{} members", format_count(circle.member_count)),
                        styling::muted_text_style(&theme),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        format!("● {} active", format_count(circle.active_now_count)),
                        styling::secondary_style(&theme),
                    ),
                ]),
                Line::from(""),
            ])
        })
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Find souls who feel the same")
        .border_style(styling::active_block_border_style(&theme));
    let list = List::new(items)
        .block(block)
        .highlight_style(styling::highlight_style(&theme))
        .highlight_symbol("▌ ");
    frame.render_stateful_widget(list, size, state.get_circles_list_state());
}
