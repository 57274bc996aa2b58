use super::Frame;
use crate::state::{SettingsItem, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Render the settings toggles.
///
pub fn settings(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let settings = state.get_settings().clone();
    let items: Vec<ListItem> = SettingsItem::ALL
        .iter()
        .map(|item| {
            let value = match item {
                SettingsItem::GhostMode => toggle(settings.ghost_mode),
                SettingsItem::Notifications => toggle(settings.notifications),
                SettingsItem::BlurPreviews => toggle(settings.blur_previews),
                SettingsItem::SoundEffects => toggle(settings.sound_effects),
                SettingsItem::Theme => theme.name.clone(),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<16}", item.label()),
                    styling::normal_text_style(&theme),
                ),
                Span::styled(value, styling::secondary_style(&theme)),
            ]))
        })
        .collect();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Settings")
        .border_style(styling::active_block_border_style(&theme));
    let list = List::new(items)
        .block(block)
        .highlight_style(styling::highlight_style(&theme))
        .highlight_symbol("▌ ");
    frame.render_stateful_widget(list, size, state.get_settings_list_state());
}

fn toggle(on: bool) -> String {
    if on { "on" } else { "off" }.to_string()
}
