use super::Frame;
use crate::content::{format_count, Post};
use crate::state::{Route, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::{post_card, styling};
use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

const EMPTY_FEED: &str = "The space is quiet right now.\n\nPress n to share what's on your soul.";

/// Render the general feed.
///
pub fn home(frame: &mut Frame, size: Rect, state: &mut State) {
    let now = state.now();
    let blur = state.get_settings().blur_previews;
    let theme = state.get_theme().clone();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Souls sharing right now")
        .border_style(styling::active_block_border_style(&theme));
    let feed = state.get_feed().to_vec();
    let mut list_state = state.get_feed_list_state().clone();
    posts(frame, size, &theme, block, &feed, &mut list_state, now, blur);
    *state.get_feed_list_state() = list_state;
}

/// Render the circle header followed by the posts filed into it.
///
pub fn circle_feed(frame: &mut Frame, size: Rect, state: &mut State) {
    let now = state.now();
    let blur = state.get_settings().blur_previews;
    let theme = state.get_theme().clone();
    let circle = match state.current_route() {
        Route::CircleFeed(circle) => circle.clone(),
        _ => return,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(size);

    let header = vec![
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
                format!("● {} active now", format_count(circle.active_now_count)),
                styling::secondary_style(&theme),
            ),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(header).wrap(Wrap { trim: true }),
        rows[0],
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Inside {}", circle.name))
        .border_style(styling::active_block_border_style(&theme));
    let feed = state.get_circle_feed().to_vec();
    let mut list_state = state.get_circle_feed_list_state().clone();
    posts(frame, rows[1], &theme, block, &feed, &mut list_state, now, blur);
    *state.get_circle_feed_list_state() = list_state;
}

#[allow(clippy::too_many_arguments)]
fn posts(
    frame: &mut Frame,
    size: Rect,
    theme: &Theme,
    block: Block,
    feed: &[Post],
    list_state: &mut ListState,
    now: DateTime<Utc>,
    blur: bool,
) {
    if feed.is_empty() {
        let empty = Paragraph::new(EMPTY_FEED)
            .block(block)
            .style(styling::muted_text_style(theme))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        frame.render_widget(empty, size);
        return;
    }
    let selected = list_state.selected();
    let items: Vec<ListItem> = feed
        .iter()
        .enumerate()
        .map(|(i, post)| post_card::post_item(theme, post, now, blur && selected != Some(i)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(styling::highlight_style(theme))
        .highlight_symbol("▌ ");
    frame.render_stateful_widget(list, size, list_state);
}
