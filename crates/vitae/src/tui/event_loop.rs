//! Event Loop - main TUI entry point and per-turn scheduling.
//!
//! Each submitted turn gets its own timer task; turns complete in timer
//! order, not input order, and the context write of the later-completing
//! turn wins. Both are intended behavior for a single visitor.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::Rng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

use vitae_common::{ResponseEngine, ResumeData, VitaeConfig};

use super::render::draw_ui;
use super::state::ChatTuiState;

/// Messages from turn timers back to the event loop
#[derive(Debug)]
pub enum TuiMessage {
    /// A turn's typing delay elapsed; respond to this utterance now
    TurnReady(String),
}

/// Run the chat TUI
pub async fn run(engine: ResponseEngine, config: VitaeConfig, resume: ResumeData) -> Result<()> {
    enable_raw_mode().map_err(|e| {
        anyhow::anyhow!(
            "Failed to enable raw mode: {}. Ensure you're running in a real terminal (TTY).",
            e
        )
    })?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        anyhow::anyhow!("Failed to initialize terminal: {}", e)
    })?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = ChatTuiState::new(resume);
    let mut engine = engine;
    let (tx, mut rx) = mpsc::channel(32);

    let result = run_event_loop(&mut terminal, &mut state, &mut engine, &config, tx, &mut rx).await;

    let cleanup_result = restore_terminal(&mut terminal);
    result.and(cleanup_result)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Main event loop
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut ChatTuiState,
    engine: &mut ResponseEngine,
    config: &VitaeConfig,
    tx: mpsc::Sender<TuiMessage>,
    rx: &mut mpsc::Receiver<TuiMessage>,
) -> Result<()> {
    loop {
        // Advance the typing animation while any turn is pending
        if state.is_typing() {
            state.typing_frame = state.typing_frame.wrapping_add(1);
        }

        // Resolve turns whose timers fired. The engine runs here, on the
        // loop, so context writes are naturally serialized.
        while let Ok(msg) = rx.try_recv() {
            match msg {
                TuiMessage::TurnReady(utterance) => {
                    state.pending_turns = state.pending_turns.saturating_sub(1);
                    let reply = engine.respond(&utterance, &mut state.context);
                    state.transcript.push_assistant(reply);
                    state.scroll_offset = usize::MAX;
                }
            }
        }

        terminal.draw(|f| draw_ui(f, state))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    // Ctrl+C - exit
                    (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    // Ctrl+L - clear conversation
                    (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
                        state.clear_conversation();
                    }
                    // Ctrl+U - clear input
                    (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                        state.input.clear();
                        state.cursor_pos = 0;
                    }
                    // F1 - toggle help
                    (KeyCode::F(1), _) => {
                        state.show_help = !state.show_help;
                    }
                    // Enter without a modifier - submit
                    (KeyCode::Enter, KeyModifiers::NONE) => {
                        submit_turn(state, config, &tx);
                    }
                    (KeyCode::Backspace, _) => {
                        if state.cursor_pos > 0 {
                            let byte = byte_index(&state.input, state.cursor_pos - 1);
                            state.input.remove(byte);
                            state.cursor_pos -= 1;
                        }
                    }
                    (KeyCode::Left, _) => {
                        state.cursor_pos = state.cursor_pos.saturating_sub(1);
                    }
                    (KeyCode::Right, _) => {
                        let max = state.input.chars().count();
                        state.cursor_pos = (state.cursor_pos + 1).min(max);
                    }
                    (KeyCode::Up, _) => state.history_up(),
                    (KeyCode::Down, _) => state.history_down(),
                    (KeyCode::PageUp, _) => {
                        let current = effective_scroll(state);
                        state.scroll_offset = current.saturating_sub(10);
                    }
                    (KeyCode::PageDown, _) => {
                        state.scroll_offset = effective_scroll(state).saturating_add(10);
                    }
                    (KeyCode::Char(c), KeyModifiers::NONE)
                    | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
                        let byte = byte_index(&state.input, state.cursor_pos);
                        state.input.insert(byte, c);
                        state.cursor_pos += 1;
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

/// Validate and schedule one turn. Empty or whitespace-only input never
/// creates a turn.
fn submit_turn(state: &mut ChatTuiState, config: &VitaeConfig, tx: &mpsc::Sender<TuiMessage>) {
    let text = state.input.trim().to_string();
    if text.is_empty() {
        return;
    }

    state.transcript.push_visitor(text.clone());
    state.input_history.push(text.clone());
    state.history_index = None;
    state.input.clear();
    state.cursor_pos = 0;
    state.pending_turns += 1;
    state.scroll_offset = usize::MAX;

    let (lo, hi) = config.delay_range();
    let delay = rand::thread_rng().gen_range(lo..=hi);
    debug!(delay_ms = delay, "turn scheduled");

    let tx = tx.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(delay)).await;
        // Receiver gone means the TUI already exited
        let _ = tx.send(TuiMessage::TurnReady(text)).await;
    });
}

/// Scroll offset with the bottom-pinned sentinel resolved to the scroll
/// bound the renderer computed on the last frame
fn effective_scroll(state: &ChatTuiState) -> usize {
    if state.scroll_offset == usize::MAX {
        state.last_max_scroll
    } else {
        state.scroll_offset
    }
}

/// Byte offset of the `char_index`-th character
fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_submit_creates_no_turn() {
        let mut state = ChatTuiState::new(ResumeData::builtin());
        state.input = "   ".to_string();
        state.cursor_pos = 3;
        let config = VitaeConfig::default();
        let (tx, mut rx) = mpsc::channel(4);

        submit_turn(&mut state, &config, &tx);

        assert!(state.transcript.is_empty());
        assert_eq!(state.pending_turns, 0);
        assert!(state.input_history.is_empty());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn submit_trims_and_schedules_one_turn() {
        let mut state = ChatTuiState::new(ResumeData::builtin());
        state.input = "  привет  ".to_string();
        let config = VitaeConfig::default();
        let (tx, _rx) = mpsc::channel(4);

        submit_turn(&mut state, &config, &tx);

        assert_eq!(state.transcript.len(), 1);
        assert_eq!(state.transcript.messages()[0].text, "привет");
        assert_eq!(state.pending_turns, 1);
        assert!(state.input.is_empty());
        assert_eq!(state.cursor_pos, 0);
    }

    #[test]
    fn page_up_from_bottom_uses_renderer_bound() {
        let mut state = ChatTuiState::new(ResumeData::builtin());
        state.last_max_scroll = 25;
        assert_eq!(effective_scroll(&state), 25);

        // One PageUp from the bottom steps up from the real bound
        state.scroll_offset = effective_scroll(&state).saturating_sub(10);
        assert_eq!(state.scroll_offset, 15);

        state.scroll_offset = 3;
        assert_eq!(effective_scroll(&state), 3);
    }

    #[test]
    fn byte_index_handles_cyrillic() {
        let s = "привет";
        assert_eq!(byte_index(s, 0), 0);
        assert_eq!(byte_index(s, 1), 2);
        assert_eq!(byte_index(s, 6), s.len());
    }
}
