use super::Frame;
use crate::state::{Route, State};
use crate::ui::widgets::{post_card, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

/// Return the height of the post panel: body lines plus header, spacer,
/// counts and borders.
///
fn post_height(body_lines: usize) -> u16 {
    u16::try_from(body_lines)
        .unwrap_or(u16::MAX)
        .saturating_add(5)
}

/// Render a post with its replies.
///
pub fn post_detail(frame: &mut Frame, size: Rect, state: &mut State) {
    let now = state.now();
    let theme = state.get_theme().clone();
    let post = match state.current_route() {
        Route::PostDetail(post) => post.clone(),
        _ => return,
    };

    let body = post_card::body_lines(
        &theme,
        post.content().body(),
        post.content().kind_label(),
        false,
    );
    let post_height = post_height(body.len());
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(post_height), Constraint::Min(3)])
        .split(size);

    let mut lines = vec![
        post_card::header_line(&theme, post.mood(), &post, now),
        Line::from(""),
    ];
    lines.extend(body);
    lines.push(Line::from(vec![
        Span::styled(
            format!("♥ {} souls felt this", post.empathy_count()),
            styling::secondary_style(&theme),
        ),
        Span::raw("   "),
        Span::styled(
            format!("↩ {} echoes", post.reply_count()),
            styling::secondary_text_style(&theme),
        ),
    ]));
    let post_block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(&theme));
    frame.render_widget(
        Paragraph::new(lines)
            .block(post_block)
            .wrap(Wrap { trim: false }),
        rows[0],
    );

    let replies_block = Block::default()
        .borders(Borders::ALL)
        .title("Echoes")
        .border_style(styling::normal_block_border_style(&theme));
    let replies = state.get_replies();
    if replies.is_empty() {
        frame.render_widget(
            Paragraph::new("No echoes yet. Press r to be the first.")
                .block(replies_block)
                .style(styling::muted_text_style(&theme))
                .alignment(Alignment::Center),
            rows[1],
        );
        return;
    }
    let items: Vec<ListItem> = replies
        .iter()
        .map(|reply| post_card::reply_item(&theme, reply, now))
        .collect();
    let list = List::new(items)
        .block(replies_block)
        .highlight_style(styling::highlight_style(&theme))
        .highlight_symbol("▌ ");
    frame.render_stateful_widget(list, rows[1], state.get_replies_list_state());
}
