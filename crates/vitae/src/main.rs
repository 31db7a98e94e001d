//! Vitae - a personal résumé presented as a chat.
//!
//! No subcommand starts the interactive chat TUI; `ask` runs a single
//! turn; `profile` renders the résumé sections.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vitae::cli::{Cli, Commands};
use vitae::{commands, tui};
use vitae_common::{ResponseEngine, ResumeData, VitaeConfig};

fn init_tracing() {
    // Silent by default; VITAE_LOG=debug lands on stderr without
    // disturbing the chat output
    let filter = EnvFilter::try_from_env("VITAE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = VitaeConfig::load().context("failed to load config")?;

    let resume = match &config.profile {
        Some(path) => ResumeData::load(path)
            .with_context(|| format!("failed to load profile {}", path.display()))?,
        None => ResumeData::builtin(),
    };

    let mut engine = match cli.seed {
        Some(seed) => ResponseEngine::with_seed(seed),
        None => ResponseEngine::new(),
    };
    engine.set_continuation_chance(config.continuation_chance);

    match cli.command {
        None => tui::run(engine, config, resume).await,
        Some(Commands::Ask { text }) => commands::ask(engine, &config, &text.join(" ")).await,
        Some(Commands::Profile { section }) => commands::profile(&resume, section.as_deref()),
    }
}
