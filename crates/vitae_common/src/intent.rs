//! Intent labels for visitor utterances.
//!
//! One label per utterance, always. The classifier never fails: anything
//! that matches no rule lands in `ShortMessage` or `Fallback`.

use serde::{Deserialize, Serialize};

/// Classified purpose of a visitor utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    /// Opening line: "привет", "hello", ...
    Greeting,
    /// Asking what the résumé covers as a whole
    ResumeOverview,
    /// Skills and technology stack
    Skills,
    /// Employment history
    Experience,
    /// Education history
    Education,
    /// Ways to get in touch
    Contacts,
    /// Pet projects and this site itself
    Projects,
    /// Free-time interests
    Hobbies,
    /// Gaming small talk
    Games,
    /// "Who/what are you?"
    WhoAreYou,
    /// "How are you?" small talk
    HowAreYou,
    /// Gratitude
    Thanks,
    /// Closing line
    Goodbye,
    /// No rule matched and the utterance is two tokens or fewer
    ShortMessage,
    /// Generic "что ..." question
    WhatQuestion,
    /// Generic "как ..." question
    HowQuestion,
    /// Generic "почему/зачем ..." question
    WhyQuestion,
    /// A known company name occurs in the utterance
    CompanyMention,
    /// A known technology name occurs in the utterance
    TechnologyMention,
    /// Nothing matched at all
    Fallback,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Greeting => "greeting",
            Self::ResumeOverview => "resume-overview",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Contacts => "contacts",
            Self::Projects => "projects",
            Self::Hobbies => "hobbies",
            Self::Games => "games",
            Self::WhoAreYou => "who-are-you",
            Self::HowAreYou => "how-are-you",
            Self::Thanks => "thanks",
            Self::Goodbye => "goodbye",
            Self::ShortMessage => "short-message",
            Self::WhatQuestion => "what-question",
            Self::HowQuestion => "how-question",
            Self::WhyQuestion => "why-question",
            Self::CompanyMention => "company-mention",
            Self::TechnologyMention => "technology-mention",
            Self::Fallback => "fallback",
        };
        write!(f, "{}", s)
    }
}

impl Intent {
    /// Parse from string (for corpus tests)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "greeting" => Some(Self::Greeting),
            "resume-overview" => Some(Self::ResumeOverview),
            "skills" => Some(Self::Skills),
            "experience" => Some(Self::Experience),
            "education" => Some(Self::Education),
            "contacts" => Some(Self::Contacts),
            "projects" => Some(Self::Projects),
            "hobbies" => Some(Self::Hobbies),
            "games" => Some(Self::Games),
            "who-are-you" => Some(Self::WhoAreYou),
            "how-are-you" => Some(Self::HowAreYou),
            "thanks" => Some(Self::Thanks),
            "goodbye" => Some(Self::Goodbye),
            "short-message" => Some(Self::ShortMessage),
            "what-question" => Some(Self::WhatQuestion),
            "how-question" => Some(Self::HowQuestion),
            "why-question" => Some(Self::WhyQuestion),
            "company-mention" => Some(Self::CompanyMention),
            "technology-mention" => Some(Self::TechnologyMention),
            "fallback" => Some(Self::Fallback),
            _ => None,
        }
    }

    /// Topic label recorded into the conversation context, if this intent
    /// discusses a résumé topic. Courtesy and service intents carry none.
    pub fn topic(&self) -> Option<&'static str> {
        match self {
            Self::ResumeOverview => Some("резюме"),
            Self::Skills => Some("навыки"),
            Self::Experience => Some("опыт работы"),
            Self::Education => Some("образование"),
            Self::Contacts => Some("контакты"),
            Self::Projects => Some("проекты"),
            Self::Hobbies => Some("хобби"),
            Self::Games => Some("игры"),
            Self::CompanyMention => Some("компании"),
            Self::TechnologyMention => Some("технологии"),
            _ => None,
        }
    }

    /// All labels, for exhaustiveness checks in tests
    pub fn all() -> &'static [Intent] {
        &[
            Self::Greeting,
            Self::ResumeOverview,
            Self::Skills,
            Self::Experience,
            Self::Education,
            Self::Contacts,
            Self::Projects,
            Self::Hobbies,
            Self::Games,
            Self::WhoAreYou,
            Self::HowAreYou,
            Self::Thanks,
            Self::Goodbye,
            Self::ShortMessage,
            Self::WhatQuestion,
            Self::HowQuestion,
            Self::WhyQuestion,
            Self::CompanyMention,
            Self::TechnologyMention,
            Self::Fallback,
        ]
    }
}
