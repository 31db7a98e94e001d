//! Vitae client library - exposes modules for integration tests.

pub mod cli;
pub mod commands;
pub mod spinner;
pub mod tui;
