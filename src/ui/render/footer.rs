use super::Frame;
use crate::state::{Screen, State};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::Paragraph};

/// Return the key hints for a screen.
///
pub fn hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Splash => " Enter: skip  q: quit",
        Screen::Onboarding => " →/Enter: next  s: skip  q: quit",
        Screen::Home => {
            " j/k: select  Enter: open  e: empathy  r: echo  n: share  u: unload  c: circles  m: pulse  p: profile  q: quit"
        }
        Screen::Create => " Tab: mood  Ctrl-t: input mode  Ctrl-s: share  Esc: cancel",
        Screen::Reply => " Tab: mood  Ctrl-t: input mode  Ctrl-s: echo back  Esc: cancel",
        Screen::DailyUnload => " Tab: new prompt  Ctrl-s: release  Esc: cancel",
        Screen::PostDetail => {
            " e: empathy  j/k: select echo  E: empathy on echo  r: echo  Esc: back"
        }
        Screen::Circles => " j/k: select  Enter: join  Esc: back",
        Screen::CircleFeed => {
            " j/k: select  Enter: open  e: empathy  r: echo  n: share here  Esc: back"
        }
        Screen::Profile => " ,: settings  Esc: back",
        Screen::MoodPulse => " Esc: back",
        Screen::Settings => " j/k: select  Enter/Space: toggle  h: help  l: legal  Esc: back",
        Screen::Help | Screen::Legal => " Esc: back",
        Screen::Error => " Enter: home  R: start over  q: quit",
    }
}

/// Render footer widget with the hints for the current screen.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let text = format!("{}  F2: log", hints(state.current_screen()));
    let footer = Paragraph::new(text).style(styling::muted_text_style(state.get_theme()));
    frame.render_widget(footer, size);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_has_hints() {
        for screen in Screen::ALL {
            assert!(!hints(screen).trim().is_empty());
        }
    }
}
