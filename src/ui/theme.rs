use crate::content::MoodTint;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Mood badge colors
    pub tint_purple: ColorSpec,
    pub tint_emerald: ColorSpec,
    pub tint_blue: ColorSpec,
    pub tint_pink: ColorSpec,
    pub tint_indigo: ColorSpec,
    pub tint_slate: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    /// Names of the built-in themes, in switching order.
    ///
    pub const NAMES: [&'static str; 2] = ["midnight", "dawn"];

    /// Return the built-in theme with the given name, or the default theme
    /// if the name is unknown.
    ///
    pub fn by_name(name: &str) -> Self {
        match name {
            "dawn" => Theme::dawn(),
            _ => Theme::midnight(),
        }
    }

    /// Return the built-in theme after this one.
    ///
    pub fn next(&self) -> Self {
        let index = Theme::NAMES
            .iter()
            .position(|name| *name == self.name)
            .unwrap_or(0);
        Theme::by_name(Theme::NAMES[(index + 1) % Theme::NAMES.len()])
    }

    /// Resolve a mood tint to a terminal color.
    ///
    pub fn tint(&self, tint: MoodTint) -> Color {
        match tint {
            MoodTint::Purple => self.tint_purple.to_color(),
            MoodTint::Emerald => self.tint_emerald.to_color(),
            MoodTint::Blue => self.tint_blue.to_color(),
            MoodTint::Pink => self.tint_pink.to_color(),
            MoodTint::Indigo => self.tint_indigo.to_color(),
            MoodTint::Slate => self.tint_slate.to_color(),
        }
    }

    /// Slate and purple night palette.
    ///
    pub fn midnight() -> Self {
        Theme {
            name: "midnight".to_string(),
            primary: ColorSpec::rgb(192, 132, 252),   // Purple 400
            secondary: ColorSpec::rgb(244, 114, 182), // Pink 400
            accent: ColorSpec::rgb(251, 146, 60),     // Orange 400
            banner: ColorSpec::rgb(192, 132, 252),
            text: ColorSpec::rgb(241, 245, 249),           // Slate 100
            text_secondary: ColorSpec::rgb(148, 163, 184), // Slate 400
            text_muted: ColorSpec::rgb(100, 116, 139),     // Slate 500
            success: ColorSpec::rgb(52, 211, 153),
            warning: ColorSpec::rgb(251, 191, 36),
            error: ColorSpec::rgb(248, 113, 113),
            border_active: ColorSpec::rgb(168, 85, 247),
            border_normal: ColorSpec::rgb(51, 65, 85),
            highlight_bg: ColorSpec::rgb(59, 7, 100),
            highlight_fg: ColorSpec::rgb(241, 245, 249),
            tint_purple: ColorSpec::rgb(192, 132, 252),
            tint_emerald: ColorSpec::rgb(52, 211, 153),
            tint_blue: ColorSpec::rgb(96, 165, 250),
            tint_pink: ColorSpec::rgb(244, 114, 182),
            tint_indigo: ColorSpec::rgb(129, 140, 248),
            tint_slate: ColorSpec::rgb(148, 163, 184),
        }
    }

    /// Warm light palette.
    ///
    pub fn dawn() -> Self {
        Theme {
            name: "dawn".to_string(),
            primary: ColorSpec::rgb(126, 34, 206),
            secondary: ColorSpec::rgb(190, 24, 93),
            accent: ColorSpec::rgb(194, 65, 12),
            banner: ColorSpec::rgb(190, 24, 93),
            text: ColorSpec::rgb(30, 41, 59),
            text_secondary: ColorSpec::rgb(71, 85, 105),
            text_muted: ColorSpec::rgb(100, 116, 139),
            success: ColorSpec::rgb(4, 120, 87),
            warning: ColorSpec::rgb(180, 83, 9),
            error: ColorSpec::rgb(185, 28, 28),
            border_active: ColorSpec::rgb(126, 34, 206),
            border_normal: ColorSpec::rgb(203, 213, 225),
            highlight_bg: ColorSpec::rgb(243, 232, 255),
            highlight_fg: ColorSpec::rgb(30, 41, 59),
            tint_purple: ColorSpec::rgb(126, 34, 206),
            tint_emerald: ColorSpec::rgb(4, 120, 87),
            tint_blue: ColorSpec::rgb(29, 78, 216),
            tint_pink: ColorSpec::rgb(190, 24, 93),
            tint_indigo: ColorSpec::rgb(67, 56, 202),
            tint_slate: ColorSpec::rgb(71, 85, 105),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_falls_back_to_midnight() {
        assert_eq!(Theme::by_name("dawn").name, "dawn");
        assert_eq!(Theme::by_name("solarized").name, "midnight");
        assert_eq!(Theme::default(), Theme::midnight());
    }

    #[test]
    fn next_cycles_through_themes() {
        let theme = Theme::midnight();
        assert_eq!(theme.next().name, "dawn");
        assert_eq!(theme.next().next().name, "midnight");
    }

    #[test]
    fn tints_resolve_to_palette() {
        let theme = Theme::midnight();
        assert_eq!(theme.tint(MoodTint::Emerald), Color::Rgb(52, 211, 153));
    }
}
