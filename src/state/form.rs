//! Compose form state.
//!
//! This module contains the state behind the post, reply and daily unload
//! composers: the mood selector, the input mode and the text area.

use crate::content::{Content, Mood};
use crossterm::event::KeyEvent;
use tui_textarea::TextArea;

/// Specifying how the composed body is interpreted.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputMode {
    Text,
    Voice,
    Doodle,
}

impl InputMode {
    pub fn next(&self) -> InputMode {
        match self {
            InputMode::Text => InputMode::Voice,
            InputMode::Voice => InputMode::Doodle,
            InputMode::Doodle => InputMode::Text,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputMode::Text => "Text",
            InputMode::Voice => "Voice transcript",
            InputMode::Doodle => "Doodle reference",
        }
    }
}

/// Specifying which composer the form belongs to.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ComposeKind {
    Post,
    Reply,
    DailyUnload,
}

/// Houses the in-progress content of a composer.
///
pub struct ComposeForm {
    kind: ComposeKind,
    mood_index: Option<usize>,
    input_mode: InputMode,
    textarea: TextArea<'static>,
    error: Option<String>,
}

impl ComposeForm {
    pub fn new(kind: ComposeKind) -> Self {
        ComposeForm {
            kind,
            mood_index: None,
            input_mode: InputMode::Text,
            textarea: TextArea::default(),
            error: None,
        }
    }

    pub fn kind(&self) -> ComposeKind {
        self.kind
    }

    /// Return the moods this composer offers.
    ///
    pub fn moods(&self) -> &'static [Mood] {
        match self.kind {
            ComposeKind::Post => Mood::composer(),
            ComposeKind::Reply => Mood::reply(),
            ComposeKind::DailyUnload => &[Mood::Neutral],
        }
    }

    pub fn selected_mood(&self) -> Option<Mood> {
        self.mood_index
            .and_then(|index| self.moods().get(index))
            .copied()
    }

    /// Return the tag of the selected mood, or an empty tag if none is
    /// selected. Daily unloads are always neutral.
    ///
    pub fn mood_tag(&self) -> String {
        match (self.kind, self.selected_mood()) {
            (ComposeKind::DailyUnload, _) => Mood::Neutral.tag().to_string(),
            (_, Some(mood)) => mood.tag().to_string(),
            (_, None) => String::new(),
        }
    }

    /// Select the next mood, wrapping around.
    ///
    pub fn next_mood(&mut self) -> &mut Self {
        let count = self.moods().len();
        self.mood_index = Some(match self.mood_index {
            Some(index) if index + 1 < count => index + 1,
            _ => 0,
        });
        self
    }

    /// Select the previous mood, wrapping around.
    ///
    pub fn previous_mood(&mut self) -> &mut Self {
        let count = self.moods().len();
        self.mood_index = Some(match self.mood_index {
            Some(index) if index > 0 => index - 1,
            _ => count.saturating_sub(1),
        });
        self
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn cycle_input_mode(&mut self) -> &mut Self {
        self.input_mode = self.input_mode.next();
        self
    }

    /// Feed a key to the text area.
    ///
    pub fn input(&mut self, key: KeyEvent) -> &mut Self {
        self.error = None;
        self.textarea.input(key);
        self
    }

    /// Replace the body with the given text.
    ///
    pub fn set_body(&mut self, body: &str) -> &mut Self {
        self.textarea = TextArea::from(body.lines().map(|line| line.to_string()));
        self
    }

    /// Return the raw body as typed.
    ///
    pub fn body(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Return the body wrapped according to the input mode.
    ///
    pub fn content(&self) -> Content {
        let body = self.body();
        match self.input_mode {
            InputMode::Text => Content::Text(body),
            InputMode::Voice => Content::Voice { transcript: body },
            InputMode::Doodle => Content::Doodle { reference: body },
        }
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: String) -> &mut Self {
        self.error = Some(error);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn no_mood_selected_yields_empty_tag() {
        let form = ComposeForm::new(ComposeKind::Post);
        assert!(form.selected_mood().is_none());
        assert_eq!(form.mood_tag(), "");
    }

    #[test]
    fn mood_selection_wraps() {
        let mut form = ComposeForm::new(ComposeKind::Post);
        form.next_mood();
        assert_eq!(form.selected_mood(), Some(Mood::Anxious));
        form.previous_mood();
        assert_eq!(form.selected_mood(), Some(Mood::Neutral));
        form.next_mood();
        assert_eq!(form.selected_mood(), Some(Mood::Anxious));
        assert_eq!(form.mood_tag(), "anxious");
    }

    #[test]
    fn reply_form_offers_reply_moods() {
        let mut form = ComposeForm::new(ComposeKind::Reply);
        form.next_mood();
        assert_eq!(form.selected_mood(), Some(Mood::Supportive));
    }

    #[test]
    fn daily_unload_is_always_neutral() {
        let form = ComposeForm::new(ComposeKind::DailyUnload);
        assert_eq!(form.mood_tag(), "neutral");
    }

    #[test]
    fn typed_keys_reach_the_body() {
        let mut form = ComposeForm::new(ComposeKind::Post);
        for c in "hi".chars() {
            form.input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        assert_eq!(form.body(), "hi");
        assert_eq!(form.content(), Content::Text("hi".to_string()));
    }

    #[test]
    fn input_mode_wraps_content() {
        let mut form = ComposeForm::new(ComposeKind::Post);
        form.set_body("line one\nline two");
        form.cycle_input_mode();
        assert_eq!(
            form.content(),
            Content::Voice {
                transcript: "line one\nline two".to_string()
            }
        );
        form.cycle_input_mode();
        assert_eq!(form.input_mode(), InputMode::Doodle);
        form.cycle_input_mode();
        assert_eq!(form.input_mode(), InputMode::Text);
    }

    #[test]
    fn typing_clears_error() {
        let mut form = ComposeForm::new(ComposeKind::Post);
        form.set_error("Pick a mood".to_string());
        assert_eq!(form.error(), Some("Pick a mood"));
        form.input(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert!(form.error().is_none());
    }
}
