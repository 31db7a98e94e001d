//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{Parser, Subcommand};

/// Vitae - résumé in the shape of a chat
#[derive(Parser)]
#[command(name = "vitae")]
#[command(about = "Personal résumé with a chat-style assistant", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Seed for the response RNG (reproduction and debugging)
    #[arg(long, global = true, hide = true)]
    pub seed: Option<u64>,

    /// Subcommand (if not provided, starts the interactive chat TUI)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Ask the assistant one question and exit
    Ask {
        /// The question text
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Print résumé sections to the terminal
    Profile {
        /// Single section: about, skills, experience, education, contacts
        #[arg(long)]
        section: Option<String>,
    },
}
