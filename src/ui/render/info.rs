use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const HELP: &[(&str, &[&str])] = &[
    (
        "In Crisis?",
        &[
            "If you are in immediate danger, please contact emergency services or a crisis line now.",
        ],
    ),
    (
        "Crisis Resources",
        &[
            "National Suicide Prevention Lifeline: 988 (24/7 crisis support)",
            "Crisis Text Line: Text HOME to 741741 (free 24/7 support via text)",
            "International Association for Suicide Prevention: global crisis resources online",
        ],
    ),
    (
        "Community Guidelines",
        &[
            "Be kind and compassionate. Everyone here is vulnerable.",
            "Respect anonymity. Never try to identify or dox other users.",
            "No harmful content: harassment, hate speech or dangerous advice.",
        ],
    ),
];

const LEGAL: &[(&str, &[&str])] = &[
    (
        "Our Privacy Commitment",
        &["SoulSpace is built so that nothing you share can be traced back to you."],
    ),
    (
        "What We Collect",
        &[
            "Anonymous activity: post content, mood selections and empathy, all anonymous.",
            "What we don't collect: names, emails, phone numbers, photos or anything identifying.",
        ],
    ),
    (
        "Ephemeral by Design",
        &[
            "Posts and echoes disappear 24 hours after they are shared.",
            "This session's ghost identity is discarded when you leave.",
        ],
    ),
    (
        "Important Disclaimer",
        &["SoulSpace is a peer support space, not a substitute for professional help."],
    ),
];

/// Render the help and safety page.
///
pub fn help(frame: &mut Frame, size: Rect, state: &State) {
    page(frame, size, state, "Help & Safety", HELP);
}

/// Render the privacy and terms page.
///
pub fn legal(frame: &mut Frame, size: Rect, state: &State) {
    page(frame, size, state, "Privacy & Terms", LEGAL);
}

fn page(frame: &mut Frame, size: Rect, state: &State, title: &str, sections: &[(&str, &[&str])]) {
    let theme = state.get_theme();
    let mut lines = vec![];
    for (heading, paragraphs) in sections {
        lines.push(Line::from(Span::styled(
            heading.to_string(),
            styling::active_block_title_style(theme),
        )));
        for paragraph in paragraphs.iter() {
            lines.push(Line::from(Span::styled(
                format!("  • {}", paragraph),
                styling::normal_text_style(theme),
            )));
        }
        lines.push(Line::from(""));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        size,
    );
}
