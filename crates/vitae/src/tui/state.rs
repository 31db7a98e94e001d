//! TUI state - everything rendered on screen comes from this struct.

use vitae_common::{ChatContext, ResumeData, Transcript};

/// Central TUI state for one chat session
#[derive(Debug)]
pub struct ChatTuiState {
    /// Ordered, append-only conversation
    pub transcript: Transcript,

    /// Per-session conversational context (topics, mood, entities)
    pub context: ChatContext,

    /// Current input buffer
    pub input: String,

    /// Input cursor position
    pub cursor_pos: usize,

    /// Scroll offset for the conversation pane; usize::MAX pins to bottom
    pub scroll_offset: usize,

    /// Largest valid scroll offset, written back by the renderer on every
    /// frame so the page keys can resolve the bottom-pinned sentinel
    pub last_max_scroll: usize,

    /// Input history for ↑/↓ navigation (session-local, never persisted)
    pub input_history: Vec<String>,

    /// Current position in history
    pub history_index: Option<usize>,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Turns submitted but not yet answered; each resolves independently
    pub pending_turns: usize,

    /// Animation frame for the typing indicator
    pub typing_frame: usize,

    /// Résumé record for the sidebar
    pub resume: ResumeData,
}

impl ChatTuiState {
    pub fn new(resume: ResumeData) -> Self {
        Self {
            transcript: Transcript::new(),
            context: ChatContext::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: usize::MAX,
            last_max_scroll: 0,
            input_history: Vec::new(),
            history_index: None,
            show_help: false,
            pending_turns: 0,
            typing_frame: 0,
            resume,
        }
    }

    /// Whether the typing indicator should be visible
    pub fn is_typing(&self) -> bool {
        self.pending_turns > 0
    }

    /// Clear the visible conversation (context survives: the visitor only
    /// cleared the screen, not the session)
    pub fn clear_conversation(&mut self) {
        self.transcript.clear();
        self.scroll_offset = usize::MAX;
    }

    /// Navigate input history upward
    pub fn history_up(&mut self) {
        if self.input_history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => self.input_history.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.history_index = Some(index);
        self.input = self.input_history[index].clone();
        self.cursor_pos = self.input.chars().count();
    }

    /// Navigate input history downward
    pub fn history_down(&mut self) {
        match self.history_index {
            None => {}
            Some(i) if i + 1 < self.input_history.len() => {
                self.history_index = Some(i + 1);
                self.input = self.input_history[i + 1].clone();
                self.cursor_pos = self.input.chars().count();
            }
            Some(_) => {
                self.history_index = None;
                self.input.clear();
                self.cursor_pos = 0;
            }
        }
    }
}
