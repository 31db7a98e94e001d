//! Chat TUI - a messenger-style terminal interface for the résumé.

pub mod event_loop;
pub mod render;
pub mod state;
pub mod utils;

pub use event_loop::run;
