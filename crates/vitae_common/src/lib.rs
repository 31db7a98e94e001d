//! Shared engine for the vitae résumé chat.
//!
//! Everything the conversational responder needs lives here: the intent
//! classifier, mood detection, the per-session context, the canned response
//! pools and the selector that ties them together. The binary crate only
//! adds presentation on top.

pub mod classifier;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod intent;
pub mod mood;
pub mod pools;
pub mod resume;
pub mod transcript;

pub use classifier::{classify, Classification};
pub use config::VitaeConfig;
pub use context::ChatContext;
pub use engine::ResponseEngine;
pub use error::VitaeError;
pub use intent::Intent;
pub use mood::Mood;
pub use resume::{ResumeData, Section};
pub use transcript::{Author, ChatMessage, Segment, Transcript};
