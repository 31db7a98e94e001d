//! Chat transcript model.
//!
//! Messages are immutable once created and only ever appended; the
//! transcript is the session's single source of truth for rendering.

use chrono::{DateTime, Local};
use regex::Regex;
use std::sync::LazyLock;
use uuid::Uuid;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    Visitor,
    Assistant,
}

/// One rendered chat entry
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub author: Author,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    fn new(author: Author, text: String) -> Self {
        Self { id: Uuid::new_v4(), author, text, timestamp: Local::now() }
    }

    /// Localized time-of-day stamp for display
    pub fn stamp(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Append-only ordered transcript
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_visitor(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(Author::Visitor, text.into())
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(Author::Assistant, text.into())
    }

    fn push(&mut self, author: Author, text: String) -> &ChatMessage {
        self.messages.push(ChatMessage::new(author, text));
        self.messages.last().expect("just pushed")
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

/// A run of response text, split on the version-tag pattern so renderers
/// can style the tag distinctly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Version(String),
}

static VERSION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v\d+\.\d+").expect("valid version-tag pattern"));

/// Split a response into plain-text and version-tag runs. Concatenating
/// the runs reproduces the input exactly.
pub fn split_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for m in VERSION_TAG.find_iter(text) {
        if m.start() > cursor {
            segments.push(Segment::Text(text[cursor..m.start()].to_string()));
        }
        segments.push(Segment::Version(m.as_str().to_string()));
        cursor = m.end();
    }
    if cursor < text.len() {
        segments.push(Segment::Text(text[cursor..].to_string()));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_reassemble_to_input() {
        let text = "Привет! Чем могу помочь? v1.42";
        let joined: String = split_segments(text)
            .iter()
            .map(|s| match s {
                Segment::Text(t) | Segment::Version(t) => t.as_str(),
            })
            .collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn version_run_is_isolated() {
        let segments = split_segments("ответ v1.17");
        assert_eq!(
            segments,
            vec![
                Segment::Text("ответ ".to_string()),
                Segment::Version("v1.17".to_string()),
            ]
        );
    }

    #[test]
    fn plain_text_is_one_segment() {
        let segments = split_segments("без тега");
        assert_eq!(segments, vec![Segment::Text("без тега".to_string())]);
    }

    #[test]
    fn transcript_is_append_only_with_distinct_ids() {
        let mut transcript = Transcript::new();
        let first_id = transcript.push_visitor("привет").id;
        let second_id = transcript.push_assistant("Привет! v1.33").id;
        assert_eq!(transcript.len(), 2);
        assert_ne!(first_id, second_id);
        assert_eq!(transcript.messages()[0].author, Author::Visitor);
        assert_eq!(transcript.messages()[1].author, Author::Assistant);
    }

    #[test]
    fn stamp_is_hour_minute() {
        let mut transcript = Transcript::new();
        let msg = transcript.push_visitor("x");
        assert_eq!(msg.stamp().len(), 5);
        assert!(msg.stamp().contains(':'));
    }
}
