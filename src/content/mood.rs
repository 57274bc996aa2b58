//! Mood taxonomy.
//!
//! Every post and reply carries exactly one mood from this closed set. Tags
//! are parsed exactly: lowercase, no surrounding whitespace.

use super::ContentError;
use std::fmt;
use std::str::FromStr;

/// Specifying the emotional tags a ghost can attach to content.
///
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub enum Mood {
    Anxious,
    Hopeful,
    Overwhelmed,
    Grateful,
    Lonely,
    Neutral,
    Supportive,
    Caring,
    Vulnerable,
    Healing,
    Nostalgic,
}

/// Display color of a mood badge, resolved to a terminal color by the theme.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MoodTint {
    Purple,
    Emerald,
    Blue,
    Pink,
    Indigo,
    Slate,
}

impl Mood {
    /// Every member of the taxonomy in canonical order.
    ///
    pub const ALL: [Mood; 11] = [
        Mood::Anxious,
        Mood::Hopeful,
        Mood::Overwhelmed,
        Mood::Grateful,
        Mood::Lonely,
        Mood::Neutral,
        Mood::Supportive,
        Mood::Caring,
        Mood::Vulnerable,
        Mood::Healing,
        Mood::Nostalgic,
    ];

    /// Moods offered when composing a post.
    ///
    pub fn composer() -> &'static [Mood] {
        &Mood::ALL[..6]
    }

    /// Moods offered when echoing back to a post.
    ///
    pub fn reply() -> &'static [Mood] {
        &[
            Mood::Supportive,
            Mood::Caring,
            Mood::Grateful,
            Mood::Hopeful,
            Mood::Neutral,
        ]
    }

    /// Return the wire tag for the mood.
    ///
    pub fn tag(&self) -> &'static str {
        match self {
            Mood::Anxious => "anxious",
            Mood::Hopeful => "hopeful",
            Mood::Overwhelmed => "overwhelmed",
            Mood::Grateful => "grateful",
            Mood::Lonely => "lonely",
            Mood::Neutral => "neutral",
            Mood::Supportive => "supportive",
            Mood::Caring => "caring",
            Mood::Vulnerable => "vulnerable",
            Mood::Healing => "healing",
            Mood::Nostalgic => "nostalgic",
        }
    }

    /// Return the human label shown in selectors.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Neutral => "Just Existing",
            Mood::Anxious => "Anxious",
            Mood::Hopeful => "Hopeful",
            Mood::Overwhelmed => "Overwhelmed",
            Mood::Grateful => "Grateful",
            Mood::Lonely => "Lonely",
            Mood::Supportive => "Supportive",
            Mood::Caring => "Caring",
            Mood::Vulnerable => "Vulnerable",
            Mood::Healing => "Healing",
            Mood::Nostalgic => "Nostalgic",
        }
    }

    pub fn tint(&self) -> MoodTint {
        match self {
            Mood::Anxious | Mood::Caring => MoodTint::Purple,
            Mood::Hopeful | Mood::Supportive | Mood::Healing => MoodTint::Emerald,
            Mood::Overwhelmed | Mood::Nostalgic => MoodTint::Blue,
            Mood::Grateful | Mood::Vulnerable => MoodTint::Pink,
            Mood::Lonely => MoodTint::Indigo,
            Mood::Neutral => MoodTint::Slate,
        }
    }

    /// Return the position of the mood in canonical order.
    ///
    pub fn ordinal(&self) -> usize {
        Mood::ALL
            .iter()
            .position(|mood| mood == self)
            .unwrap_or(Mood::ALL.len())
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Mood {
    type Err = ContentError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .iter()
            .find(|mood| mood.tag() == tag)
            .copied()
            .ok_or_else(|| ContentError::InvalidMood {
                tag: tag.to_string(),
            })
    }
}

/// Validate a raw mood tag against the taxonomy.
///
pub fn validate_mood(tag: &str) -> Result<Mood, ContentError> {
    tag.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_mood_accepts_every_member() {
        for mood in Mood::ALL {
            assert_eq!(validate_mood(mood.tag()).unwrap(), mood);
        }
    }

    #[test]
    fn validate_mood_rejects_case_variants_and_empty() {
        for tag in ["", "Hopeful", "HOPEFUL", " hopeful", "hopeful ", "happy", "just existing"] {
            let error = validate_mood(tag).unwrap_err();
            assert!(matches!(error, ContentError::InvalidMood { .. }), "{:?}", tag);
        }
    }

    #[test]
    fn composer_and_reply_moods_are_members() {
        assert_eq!(
            Mood::composer(),
            &[
                Mood::Anxious,
                Mood::Hopeful,
                Mood::Overwhelmed,
                Mood::Grateful,
                Mood::Lonely,
                Mood::Neutral
            ]
        );
        assert!(Mood::reply().contains(&Mood::Supportive));
        assert!(Mood::reply().contains(&Mood::Caring));
    }

    #[test]
    fn neutral_label() {
        assert_eq!(Mood::Neutral.label(), "Just Existing");
        assert_eq!(Mood::Neutral.to_string(), "neutral");
    }

    #[test]
    fn ordinal_follows_canonical_order() {
        assert_eq!(Mood::Anxious.ordinal(), 0);
        assert_eq!(Mood::Nostalgic.ordinal(), 10);
    }
}
