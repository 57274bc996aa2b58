use super::Frame;
use crate::state::{State, ONBOARDING_SLIDE_COUNT};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

struct Slide {
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
}

const SLIDES: [Slide; ONBOARDING_SLIDE_COUNT] = [
    Slide {
        title: "No names. No faces.",
        subtitle: "Just you.",
        description: "Share your deepest emotions without revealing who you are. \
                      Every soul is anonymous here.",
    },
    Slide {
        title: "Post anything.",
        subtitle: "It vanishes in 24h.",
        description: "Express yourself freely. All posts disappear after 24 hours, \
                      leaving no permanent trace.",
    },
    Slide {
        title: "Ready to be",
        subtitle: "truly yourself?",
        description: "Join a community where vulnerability is strength and empathy \
                      is everything.",
    },
];

/// Render the current onboarding slide with its progress dots.
///
pub fn onboarding(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let index = state.get_onboarding_slide().min(ONBOARDING_SLIDE_COUNT - 1);
    let slide = &SLIDES[index];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .margin(2)
        .split(size);

    let heading = vec![
        Line::from(Span::styled(slide.title, styling::banner_style(theme))),
        Line::from(Span::styled(slide.subtitle, styling::banner_style(theme))),
    ];
    frame.render_widget(
        Paragraph::new(heading).alignment(Alignment::Center),
        rows[1],
    );
    frame.render_widget(
        Paragraph::new(slide.description)
            .style(styling::secondary_text_style(theme))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[2],
    );

    let dots: Vec<Span> = (0..ONBOARDING_SLIDE_COUNT)
        .map(|i| {
            if i == index {
                Span::styled("● ", styling::active_block_title_style(theme))
            } else {
                Span::styled("○ ", styling::muted_text_style(theme))
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        rows[3],
    );
}
