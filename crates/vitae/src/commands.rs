//! One-shot commands: `ask` and `profile`.

use anyhow::{bail, Result};
use owo_colors::OwoColorize;
use rand::Rng;
use std::time::Duration;
use tracing::info;

use vitae_common::transcript::{split_segments, Segment};
use vitae_common::{ChatContext, ResponseEngine, ResumeData, Section, VitaeConfig};

use crate::spinner::{print_question, Spinner};

/// Ask the assistant one question on a fresh context
pub async fn ask(mut engine: ResponseEngine, config: &VitaeConfig, text: &str) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        bail!("empty question - nothing to ask");
    }

    print_question(text);

    // Simulated typing latency, same window the chat TUI uses
    let (lo, hi) = config.delay_range();
    let delay = rand::thread_rng().gen_range(lo..=hi);
    info!(delay_ms = delay, "simulating typing");

    let spinner = Spinner::new("печатает...");
    tokio::time::sleep(Duration::from_millis(delay)).await;
    spinner.stop();

    let mut ctx = ChatContext::new();
    let reply = engine.respond(text, &mut ctx);

    print!("{}  ", "[vitae]".bright_cyan());
    for segment in split_segments(&reply) {
        match segment {
            Segment::Text(t) => print!("{}", t),
            Segment::Version(v) => print!("{}", v.bright_magenta()),
        }
    }
    println!();

    Ok(())
}

/// Render résumé sections to the terminal
pub fn profile(resume: &ResumeData, section: Option<&str>) -> Result<()> {
    let sections: Vec<Section> = match section {
        None => Section::all().to_vec(),
        Some(s) => match Section::from_str(s) {
            Some(section) => vec![section],
            None => bail!(
                "unknown section '{}' (expected one of: about, skills, experience, education, contacts)",
                s
            ),
        },
    };

    println!("{}", resume.name.bold());
    println!("{}", resume.title.dimmed());
    println!();

    for section in sections {
        println!("{}", format!("— {} —", section.title()).bright_cyan());
        match section {
            Section::About => {
                println!("{}", resume.about);
            }
            Section::Skills => {
                for skill in &resume.skills {
                    println!("  {:<24} {}", skill.name, level_bar(skill.level));
                }
            }
            Section::Experience => {
                for exp in &resume.experience {
                    println!("  {} — {}", exp.company.bold(), exp.position);
                    println!("  {}", exp.period.dimmed());
                    for line in &exp.description {
                        println!("    • {}", line);
                    }
                }
            }
            Section::Education => {
                for edu in &resume.education {
                    println!("  {}", edu.institution.bold());
                    println!("  {} ({})", edu.degree, edu.period.dimmed());
                    if let Some(desc) = &edu.description {
                        println!("    {}", desc);
                    }
                }
            }
            Section::Contacts => {
                for contact in &resume.contacts {
                    match &contact.link {
                        Some(link) => {
                            println!("  {:<10} {} ({})", contact.kind, contact.value, link.dimmed())
                        }
                        None => println!("  {:<10} {}", contact.kind, contact.value),
                    }
                }
            }
        }
        println!();
    }

    Ok(())
}

/// Five-slot proficiency bar, filled to `level`
fn level_bar(level: u8) -> String {
    let level = level.clamp(1, 5) as usize;
    let mut bar = String::new();
    for i in 0..5 {
        bar.push(if i < level { '■' } else { '□' });
    }
    bar
}
