//! Ordered keyword rules mapping a visitor utterance to an intent.
//!
//! Rules are evaluated top to bottom and the first match wins. That order
//! is an observable contract: several keyword sets overlap (a message can
//! contain both "спасибо" and "навыки") and rule position is the only
//! tie-break, so reordering the table changes classification.
//!
//! Company/technology detection and mood detection run independently of
//! the intent rules and attach as side channels on every utterance.

use crate::intent::Intent;
use crate::mood::{self, Mood};

/// Classifier output for one utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub intent: Intent,
    /// Known company mentioned in the utterance, if any
    pub company: Option<&'static str>,
    /// Known technology mentioned in the utterance, if any
    pub technology: Option<&'static str>,
    /// Mood trigger found in the utterance, if any
    pub mood: Option<Mood>,
}

/// Matching predicate for one rule
enum Pattern {
    /// Utterance starts with any of these fragments
    Prefix(&'static [&'static str]),
    /// Utterance contains any of these fragments
    AnyOf(&'static [&'static str]),
    /// Utterance contains any of these as a whole token
    Word(&'static [&'static str]),
    /// A company from the lookup table occurs in the utterance
    KnownCompany,
    /// A technology from the lookup table occurs in the utterance
    KnownTechnology,
}

impl Pattern {
    fn matches(&self, text: &str, words: &[&str]) -> bool {
        match self {
            Self::Prefix(fragments) => fragments.iter().any(|f| text.starts_with(f)),
            Self::AnyOf(fragments) => fragments.iter().any(|f| text.contains(f)),
            Self::Word(tokens) => tokens.iter().any(|t| words.contains(t)),
            Self::KnownCompany => detect_company(text).is_some(),
            Self::KnownTechnology => detect_technology(text).is_some(),
        }
    }
}

/// The rule table. Entity-mention rules sit above the generic topical
/// rules so that a specific name beats a broad category, and courtesy
/// rules sit above everything so "спасибо" stays gratitude no matter
/// what else the message touches.
const RULES: &[(Pattern, Intent)] = &[
    (
        Pattern::Prefix(&["привет", "здравствуй", "hi", "hello", "добр", "хай", "салют"]),
        Intent::Greeting,
    ),
    (
        Pattern::AnyOf(&["спасибо", "благодар", "thanks", "thank you"]),
        Intent::Thanks,
    ),
    (Pattern::Word(&["пока", "bye", "goodbye"]), Intent::Goodbye),
    (
        Pattern::AnyOf(&["до свидания", "прощай", "до встречи"]),
        Intent::Goodbye,
    ),
    (
        Pattern::AnyOf(&["кто ты", "что ты", "ты кто", "расскажи о себе"]),
        Intent::WhoAreYou,
    ),
    (
        Pattern::AnyOf(&["как дела", "как жизнь", "как поживаешь", "что нового"]),
        Intent::HowAreYou,
    ),
    (Pattern::KnownCompany, Intent::CompanyMention),
    (Pattern::KnownTechnology, Intent::TechnologyMention),
    (
        Pattern::AnyOf(&[
            "навык",
            "технологи",
            "умеешь",
            "знаешь",
            "стек",
            "фреймворк",
            "библиотек",
            "skill",
        ]),
        Intent::Skills,
    ),
    (
        Pattern::AnyOf(&["образован", "университет", "институт", "учился", "диплом"]),
        Intent::Education,
    ),
    (
        Pattern::AnyOf(&[
            "контакт",
            "связаться",
            "email",
            "почта",
            "телефон",
            "telegram",
            "github",
            "написать",
        ]),
        Intent::Contacts,
    ),
    (
        Pattern::AnyOf(&["проект", "портфолио", "сайт", "сделал", "создал", "разработал"]),
        Intent::Projects,
    ),
    (
        Pattern::AnyOf(&["хобби", "увлече", "увлека", "свободное время", "отдыхаешь"]),
        Intent::Hobbies,
    ),
    (
        Pattern::AnyOf(&["игр", "геймер", "steam", "playstation"]),
        Intent::Games,
    ),
    (
        Pattern::AnyOf(&["резюме", "карьер", "професси", "resume", "cv"]),
        Intent::ResumeOverview,
    ),
    (
        Pattern::AnyOf(&["опыт", "работа", "работал", "компани", "должност"]),
        Intent::Experience,
    ),
    (Pattern::Prefix(&["что "]), Intent::WhatQuestion),
    (Pattern::Prefix(&["как "]), Intent::HowQuestion),
    (Pattern::Prefix(&["почему ", "зачем "]), Intent::WhyQuestion),
];

/// A named entity with the lowercase fragments that reveal it
pub struct EntityEntry {
    pub name: &'static str,
    pub tokens: &'static [&'static str],
}

/// Companies, in priority order. When several occur in one utterance the
/// first table entry with a hit wins.
pub const COMPANIES: &[EntityEntry] = &[
    EntityEntry { name: "Яндекс", tokens: &["яндекс", "yandex"] },
    EntityEntry { name: "Сбер", tokens: &["сбер", "sber"] },
    EntityEntry { name: "Ozon", tokens: &["озон", "ozon"] },
    EntityEntry { name: "VK", tokens: &["вконтакте", "vk"] },
    EntityEntry { name: "Google", tokens: &["гугл", "google"] },
];

/// Technologies, in priority order. TypeScript sits above JavaScript so
/// that "typescript" does not resolve to the substring "script" family.
pub const TECHNOLOGIES: &[EntityEntry] = &[
    EntityEntry { name: "React", tokens: &["react", "реакт"] },
    EntityEntry { name: "TypeScript", tokens: &["typescript", "тайпскрипт"] },
    EntityEntry { name: "JavaScript", tokens: &["javascript", "джаваскрипт"] },
    EntityEntry { name: "Node.js", tokens: &["node", "нода", "ноде"] },
    EntityEntry { name: "Rust", tokens: &["rust", "раст"] },
    EntityEntry { name: "Docker", tokens: &["docker", "докер"] },
    EntityEntry { name: "CSS", tokens: &["css"] },
];

/// First company from the priority table whose token occurs in the text
pub fn detect_company(text: &str) -> Option<&'static str> {
    COMPANIES
        .iter()
        .find(|e| e.tokens.iter().any(|t| text.contains(t)))
        .map(|e| e.name)
}

/// First technology from the priority table whose token occurs in the text
pub fn detect_technology(text: &str) -> Option<&'static str> {
    TECHNOLOGIES
        .iter()
        .find(|e| e.tokens.iter().any(|t| text.contains(t)))
        .map(|e| e.name)
}

/// Classify one utterance. Total: every input gets exactly one intent.
pub fn classify(utterance: &str) -> Classification {
    let text = utterance.trim().to_lowercase();
    // Strip common punctuation for whole-token matching
    let cleaned = text
        .replace('?', " ")
        .replace('!', " ")
        .replace(',', " ")
        .replace('.', " ");
    let words: Vec<&str> = cleaned.split_whitespace().collect();

    let company = detect_company(&text);
    let technology = detect_technology(&text);
    let mood = mood::detect_mood(&text);

    for (pattern, intent) in RULES {
        if pattern.matches(&text, &words) {
            return Classification { intent: *intent, company, technology, mood };
        }
    }

    // Distinct fallback tier for one- and two-token messages
    let intent = if words.len() <= 2 {
        Intent::ShortMessage
    } else {
        Intent::Fallback
    };
    Classification { intent, company, technology, mood }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn intent_of(s: &str) -> Intent {
        classify(s).intent
    }

    #[test]
    fn greeting_prefixes() {
        assert_eq!(intent_of("привет"), Intent::Greeting);
        assert_eq!(intent_of("Здравствуйте!"), Intent::Greeting);
        assert_eq!(intent_of("добрый день"), Intent::Greeting);
        assert_eq!(intent_of("hello there"), Intent::Greeting);
    }

    #[test]
    fn topical_categories() {
        assert_eq!(intent_of("расскажи про навыки"), Intent::Skills);
        assert_eq!(intent_of("где ты учился, какое образование?"), Intent::Education);
        assert_eq!(intent_of("как с тобой связаться"), Intent::Contacts);
        assert_eq!(intent_of("покажи портфолио"), Intent::Projects);
        assert_eq!(intent_of("какой у тебя опыт"), Intent::Experience);
        assert_eq!(intent_of("пришли ссылку на резюме"), Intent::ResumeOverview);
        assert_eq!(intent_of("есть хобби?"), Intent::Hobbies);
        assert_eq!(intent_of("в какие игры играешь"), Intent::Games);
    }

    #[test]
    fn courtesy_rules_beat_topics() {
        // "спасибо" is listed before "навыки": first rule wins
        assert_eq!(intent_of("спасибо, про навыки все понятно"), Intent::Thanks);
        assert_eq!(intent_of("привет, расскажи про опыт"), Intent::Greeting);
    }

    #[test]
    fn entity_mentions_beat_generic_topics() {
        // "работал в яндексе" also contains the experience keyword "работал"
        let c = classify("ты работал в яндексе?");
        assert_eq!(c.intent, Intent::CompanyMention);
        assert_eq!(c.company, Some("Яндекс"));

        let c = classify("насколько хорошо знаешь react?");
        assert_eq!(c.intent, Intent::TechnologyMention);
        assert_eq!(c.technology, Some("React"));
    }

    #[test]
    fn company_knowledge_phrasing() {
        let c = classify("что такое яндекс");
        assert_eq!(c.intent, Intent::CompanyMention);
        assert_eq!(c.company, Some("Яндекс"));
    }

    #[test]
    fn question_prefixes() {
        assert_eq!(intent_of("что входит в твой рабочий день"), Intent::WhatQuestion);
        assert_eq!(intent_of("как ты оцениваешь свой уровень"), Intent::HowQuestion);
        assert_eq!(intent_of("почему ты выбрал фронтенд"), Intent::WhyQuestion);
    }

    #[test]
    fn how_are_you_beats_how_question() {
        assert_eq!(intent_of("как дела?"), Intent::HowAreYou);
    }

    #[test]
    fn short_message_tier() {
        assert_eq!(intent_of("x"), Intent::ShortMessage);
        assert_eq!(intent_of("ну ладно"), Intent::ShortMessage);
        // Three unmatched tokens fall through to the generic fallback
        assert_eq!(intent_of("бла бла бла"), Intent::Fallback);
    }

    #[test]
    fn goodbye_matches_whole_word_only() {
        assert_eq!(intent_of("пока"), Intent::Goodbye);
        // "показать" contains "пока" but is not a farewell
        assert_eq!(intent_of("показать раздел с контактами"), Intent::Contacts);
    }

    #[test]
    fn entity_priority_order() {
        // Both companies present: first table entry wins
        let c = classify("что лучше: яндекс или сбер?");
        assert_eq!(c.company, Some("Яндекс"));

        let c = classify("сбер против гугла");
        assert_eq!(c.company, Some("Сбер"));
    }

    #[test]
    fn entities_attach_regardless_of_intent() {
        // Thanks wins the intent, but the technology still rides along
        let c = classify("спасибо за рассказ про react");
        assert_eq!(c.intent, Intent::Thanks);
        assert_eq!(c.technology, Some("React"));
    }

    #[test]
    fn mood_attaches_as_side_channel() {
        let c = classify("круто! расскажи про навыки");
        assert_eq!(c.intent, Intent::Skills);
        assert_eq!(c.mood, Some(Mood::Enthusiastic));
    }

    #[test]
    fn classify_is_total() {
        for input in ["", " ", "x", "совершенно непонятный набор слов тут"] {
            let c = classify(input);
            assert!(Intent::all().contains(&c.intent));
        }
    }
}
