//! Conversation mood detection.
//!
//! Mood is a coarse affective register that picks which variant of a
//! mood-keyed response pool is used. It is overwritten whenever an
//! utterance matches a trigger, never accumulated, and may return to an
//! earlier value at any time.

use serde::{Deserialize, Serialize};

/// Affective register of the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Friendly,
    Professional,
    Casual,
    Enthusiastic,
    Curious,
    Helpful,
}

impl Default for Mood {
    fn default() -> Self {
        Self::Friendly
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Friendly => "friendly",
            Self::Professional => "professional",
            Self::Casual => "casual",
            Self::Enthusiastic => "enthusiastic",
            Self::Curious => "curious",
            Self::Helpful => "helpful",
        };
        write!(f, "{}", s)
    }
}

impl Mood {
    /// Parse from string (config and tests)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "friendly" => Some(Self::Friendly),
            "professional" => Some(Self::Professional),
            "casual" => Some(Self::Casual),
            "enthusiastic" => Some(Self::Enthusiastic),
            "curious" => Some(Self::Curious),
            "helpful" => Some(Self::Helpful),
            _ => None,
        }
    }

    /// All moods, for exhaustiveness checks in tests
    pub fn all() -> &'static [Mood] {
        &[
            Self::Friendly,
            Self::Professional,
            Self::Casual,
            Self::Enthusiastic,
            Self::Curious,
            Self::Helpful,
        ]
    }
}

/// Trigger keywords, evaluated in order; the first matching row wins.
/// Fragments match as substrings of the lowercased utterance.
const MOOD_TRIGGERS: &[(Mood, &[&str])] = &[
    (
        Mood::Enthusiastic,
        &["круто", "вау", "классно", "супер", "огонь", "потрясающе", "awesome"],
    ),
    (
        Mood::Professional,
        &["официально", "деловой", "формально", "по делу", "по существу"],
    ),
    (
        Mood::Casual,
        &["чувак", "братан", "по-простому", "без формальностей"],
    ),
    (
        Mood::Curious,
        &["интересно", "любопытно", "хочу узнать", "а правда"],
    ),
    (
        Mood::Helpful,
        &["помоги", "подскажи", "помощь", "не могу найти", "help"],
    ),
    (
        Mood::Friendly,
        &["дружище", "приятно познакомиться", "рад знакомству"],
    ),
];

/// Scan an utterance for a mood trigger.
///
/// Expects lowercased text. Returns `None` when nothing matched, in which
/// case the context keeps its current mood.
pub fn detect_mood(text: &str) -> Option<Mood> {
    for (mood, fragments) in MOOD_TRIGGERS {
        if fragments.iter().any(|f| text.contains(f)) {
            return Some(*mood);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_friendly() {
        assert_eq!(Mood::default(), Mood::Friendly);
    }

    #[test]
    fn detects_triggers() {
        assert_eq!(detect_mood("вау, как круто"), Some(Mood::Enthusiastic));
        assert_eq!(detect_mood("давай по делу"), Some(Mood::Professional));
        assert_eq!(detect_mood("подскажи, где контакты"), Some(Mood::Helpful));
        assert_eq!(detect_mood("мне интересно про проекты"), Some(Mood::Curious));
    }

    #[test]
    fn no_trigger_means_none() {
        assert_eq!(detect_mood("расскажи про навыки"), None);
        assert_eq!(detect_mood(""), None);
    }

    #[test]
    fn first_row_wins_on_overlap() {
        // "круто" (enthusiastic) is listed before "по делу" (professional)
        assert_eq!(detect_mood("круто, но давай по делу"), Some(Mood::Enthusiastic));
    }

    #[test]
    fn display_from_str_roundtrip() {
        for mood in Mood::all() {
            assert_eq!(Mood::from_str(&mood.to_string()), Some(*mood));
        }
    }
}
