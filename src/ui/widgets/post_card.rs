use crate::content::{format_age, format_remaining, Ephemeral, Mood, Post, Reply};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use chrono::{DateTime, Utc};
use ratatui::{
    text::{Line, Span},
    widgets::ListItem,
};

const BLUR_GLYPH: char = '░';

/// Return the header line of a card: mood badge, age and remaining lifetime.
///
pub fn header_line<T: Ephemeral>(
    theme: &Theme,
    mood: Mood,
    entry: &T,
    now: DateTime<Utc>,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("[{}]", mood.label()), styling::mood_style(theme, mood)),
        Span::raw("  "),
        Span::styled(
            format_age(entry.created_at(), now),
            styling::secondary_text_style(theme),
        ),
        Span::styled(" · ", styling::muted_text_style(theme)),
        Span::styled(
            format_remaining(entry.remaining(now)),
            styling::accent_style(theme),
        ),
    ])
}

/// Return the body lines, masked when previews are blurred.
///
pub fn body_lines(theme: &Theme, body: &str, kind: Option<&str>, blur: bool) -> Vec<Line<'static>> {
    let mut lines = vec![];
    if let Some(kind) = kind {
        lines.push(Line::from(Span::styled(
            format!("({})", kind),
            styling::muted_text_style(theme),
        )));
    }
    for line in body.lines() {
        let text = if blur {
            line.chars()
                .map(|c| if c.is_whitespace() { c } else { BLUR_GLYPH })
                .collect()
        } else {
            line.to_string()
        };
        lines.push(Line::from(Span::styled(
            text,
            styling::normal_text_style(theme),
        )));
    }
    lines
}

fn counts_line(theme: &Theme, empathy: u32, replies: Option<u32>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("♥ {}", empathy),
        styling::secondary_style(theme),
    )];
    if let Some(replies) = replies {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(
            format!("↩ {} echoes", replies),
            styling::secondary_text_style(theme),
        ));
    }
    Line::from(spans)
}

/// Return a feed list item for a post.
///
pub fn post_item(theme: &Theme, post: &Post, now: DateTime<Utc>, blur: bool) -> ListItem<'static> {
    let mut lines = vec![header_line(theme, post.mood(), post, now)];
    lines.extend(body_lines(
        theme,
        post.content().body(),
        post.content().kind_label(),
        blur,
    ));
    lines.push(counts_line(
        theme,
        post.empathy_count(),
        Some(post.reply_count()),
    ));
    lines.push(Line::from(""));
    ListItem::new(lines)
}

/// Return a list item for a reply.
///
pub fn reply_item(theme: &Theme, reply: &Reply, now: DateTime<Utc>) -> ListItem<'static> {
    let mut lines = vec![header_line(theme, reply.mood(), reply, now)];
    lines.extend(body_lines(
        theme,
        reply.content().body(),
        reply.content().kind_label(),
        false,
    ));
    lines.push(counts_line(theme, reply.empathy_count(), None));
    lines.push(Line::from(""));
    ListItem::new(lines)
}
