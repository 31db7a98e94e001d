//! Terminal spinner for the typing animation (one-shot `ask` path).
//! SSH-friendly: TTY detection and slow updates.

use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Braille spinner frames for smooth animation
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner update interval (ms)
const SPINNER_INTERVAL_MS: u64 = 200;

/// Spinner shown while the assistant "types"
pub struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<std::thread::JoinHandle<()>>,
    is_tty: bool,
}

impl Spinner {
    /// Start a new spinner with message
    pub fn new(message: &str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let message = message.to_string();
        let is_tty = io::stdout().is_terminal();

        // For non-TTY (piped output, scripts), just print once without spinner
        if !is_tty {
            println!("[vitae]  ... {}", message);
            return Self { running, handle: None, is_tty: false };
        }

        print!(
            "\r{}  {} {}",
            "[vitae]".bright_cyan(),
            SPINNER_FRAMES[0].bright_yellow(),
            message.dimmed()
        );
        let _ = io::stdout().flush();

        let handle = std::thread::spawn(move || {
            let mut frame = 0;

            while running_clone.load(Ordering::Relaxed) {
                frame = (frame + 1) % SPINNER_FRAMES.len();
                print!(
                    "\r{}  {} {}",
                    "[vitae]".bright_cyan(),
                    SPINNER_FRAMES[frame].bright_yellow(),
                    message.dimmed()
                );
                let _ = io::stdout().flush();
                std::thread::sleep(Duration::from_millis(SPINNER_INTERVAL_MS));
            }
        });

        Self { running, handle: Some(handle), is_tty }
    }

    /// Stop the spinner and clear its line
    pub fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }

        if self.is_tty {
            // Clear the spinner line
            print!("\r{}\r", " ".repeat(80));
            let _ = io::stdout().flush();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

/// Print the visitor's question in styled form
pub fn print_question(question: &str) {
    println!("{}  {}", "[you]".bright_green(), question);
}
