//! Per-session conversation context.
//!
//! A single mutable value owned by the hosting UI for the lifetime of one
//! session. Topics, companies and technologies only ever grow; mood is the
//! one field allowed to regress to an earlier value.

use crate::mood::Mood;

/// Accumulated conversational state for one session
#[derive(Debug, Clone, Default)]
pub struct ChatContext {
    /// Distinct topics discussed so far, in insertion order
    pub topics: Vec<String>,
    /// Current mood, overwritten on trigger
    pub mood: Mood,
    /// Most recently discussed topic
    pub last_topic: Option<String>,
    /// Utterances processed this session
    pub message_count: u64,
    /// Distinct companies mentioned so far, in insertion order
    pub companies: Vec<String>,
    /// Distinct technologies mentioned so far, in insertion order
    pub technologies: Vec<String>,
}

impl ChatContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a discussed topic and make it the latest one
    pub fn note_topic(&mut self, topic: &str) {
        if !self.topics.iter().any(|t| t == topic) {
            self.topics.push(topic.to_string());
        }
        self.last_topic = Some(topic.to_string());
    }

    /// Record a mentioned company, once
    pub fn note_company(&mut self, name: &str) {
        if !self.companies.iter().any(|c| c == name) {
            self.companies.push(name.to_string());
        }
    }

    /// Record a mentioned technology, once
    pub fn note_technology(&mut self, name: &str) {
        if !self.technologies.iter().any(|t| t == name) {
            self.technologies.push(name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics_are_distinct_and_ordered() {
        let mut ctx = ChatContext::new();
        ctx.note_topic("навыки");
        ctx.note_topic("опыт работы");
        ctx.note_topic("навыки");
        assert_eq!(ctx.topics, vec!["навыки", "опыт работы"]);
        assert_eq!(ctx.last_topic.as_deref(), Some("навыки"));
    }

    #[test]
    fn entities_deduplicate() {
        let mut ctx = ChatContext::new();
        ctx.note_company("Яндекс");
        ctx.note_company("Яндекс");
        ctx.note_technology("React");
        ctx.note_technology("Rust");
        ctx.note_technology("React");
        assert_eq!(ctx.companies, vec!["Яндекс"]);
        assert_eq!(ctx.technologies, vec!["React", "Rust"]);
    }

    #[test]
    fn fresh_context_defaults() {
        let ctx = ChatContext::new();
        assert_eq!(ctx.mood, Mood::Friendly);
        assert_eq!(ctx.message_count, 0);
        assert!(ctx.topics.is_empty());
        assert!(ctx.last_topic.is_none());
    }
}
