//! Rendering - drawing the chat, the résumé sidebar, and the status bar.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use vitae_common::transcript::{split_segments, Author, Segment};

use super::state::ChatTuiState;
use super::utils::{draw_help_overlay, wrap_text};

/// Typing indicator frames
const TYPING_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Draw the UI - messenger style with header, chat pane, sidebar,
/// status bar and input bar
pub fn draw_ui(f: &mut Frame, state: &mut ChatTuiState) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(3),    // content
            Constraint::Length(1), // status bar
            Constraint::Length(3), // input
        ])
        .split(size);

    draw_header(f, chunks[0], state);

    // Sidebar only when there is room for it
    if size.width >= 80 {
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(chunks[1]);
        draw_conversation(f, content[0], state);
        draw_sidebar(f, content[1], state);
    } else {
        draw_conversation(f, chunks[1], state);
    }

    draw_status_bar(f, chunks[2], state);
    draw_input_bar(f, chunks[3], state);

    if state.show_help {
        draw_help_overlay(f, size);
    }
}

/// Header: vitae version | name — title
fn draw_header(f: &mut Frame, area: Rect, state: &ChatTuiState) {
    let text = format!(
        " vitae v{} | {} — {}",
        env!("CARGO_PKG_VERSION"),
        state.resume.name,
        state.resume.title
    );
    let header = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::Rgb(150, 200, 255)),
    )))
    .style(Style::default().bg(Color::Rgb(0, 0, 0)));
    f.render_widget(header, area);
}

/// Status bar: time | turn count | typing flag
fn draw_status_bar(f: &mut Frame, area: Rect, state: &ChatTuiState) {
    let time_str = Local::now().format("%H:%M:%S").to_string();
    let typing = if state.is_typing() { " | печатает…" } else { "" };
    let text = format!(
        " {} | сообщений: {}{}",
        time_str,
        state.transcript.len(),
        typing
    );
    let bar = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::Rgb(180, 180, 180)),
    )))
    .style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(bar, area);
}

/// Conversation pane with scrollback and the typing indicator
fn draw_conversation(f: &mut Frame, area: Rect, state: &mut ChatTuiState) {
    let content_width = area.width.saturating_sub(4) as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();

    for msg in state.transcript.messages() {
        let (label, color) = match msg.author {
            Author::Visitor => ("Вы", Color::Rgb(100, 150, 255)),
            Author::Assistant => ("Ассистент", Color::Rgb(100, 255, 100)),
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", label),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("[{}]", msg.stamp()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        for wrapped in wrap_text(&msg.text, content_width) {
            lines.push(styled_message_line(&wrapped, msg.author));
        }
        lines.push(Line::from(""));
    }

    if state.is_typing() {
        let frame = TYPING_FRAMES[state.typing_frame % TYPING_FRAMES.len()];
        lines.push(Line::from(Span::styled(
            format!("{} Ассистент печатает…", frame),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let total_lines = lines.len();
    let visible_lines = area.height.saturating_sub(2) as usize;
    let max_scroll = total_lines.saturating_sub(visible_lines);
    // The page keys resolve the bottom-pinned sentinel against this bound
    state.last_max_scroll = max_scroll;
    let scroll = state.scroll_offset.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Чат "))
        .scroll((scroll as u16, 0));
    f.render_widget(paragraph, area);
}

/// One wrapped line of a message, with the version tag rendered as
/// visually distinguished inline content
fn styled_message_line(text: &str, author: Author) -> Line<'static> {
    if author == Author::Visitor {
        return Line::from(Span::raw(text.to_string()));
    }
    let spans: Vec<Span<'static>> = split_segments(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(t) => Span::raw(t),
            Segment::Version(v) => Span::styled(
                v,
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
        })
        .collect();
    Line::from(spans)
}

/// Sidebar: the résumé sections the site shows in its menu
fn draw_sidebar(f: &mut Frame, area: Rect, state: &ChatTuiState) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let section_style = Style::default()
        .fg(Color::Rgb(150, 200, 255))
        .add_modifier(Modifier::BOLD);

    lines.push(Line::from(Span::styled("Навыки", section_style)));
    for skill in &state.resume.skills {
        let filled = skill.level.clamp(1, 5) as usize;
        let bar: String = (0..5).map(|i| if i < filled { '■' } else { '□' }).collect();
        lines.push(Line::from(vec![
            Span::raw(format!(" {:<18}", skill.name)),
            Span::styled(bar, Style::default().fg(Color::Rgb(100, 255, 100))),
        ]));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Опыт работы", section_style)));
    for exp in &state.resume.experience {
        lines.push(Line::from(format!(" {} — {}", exp.company, exp.position)));
        lines.push(Line::from(Span::styled(
            format!("   {}", exp.period),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Контакты", section_style)));
    for contact in &state.resume.contacts {
        lines.push(Line::from(format!(" {}: {}", contact.kind, contact.value)));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Резюме "));
    f.render_widget(paragraph, area);
}

/// Input bar with a block cursor
fn draw_input_bar(f: &mut Frame, area: Rect, state: &ChatTuiState) {
    let mut spans = vec![Span::styled("> ", Style::default().fg(Color::Rgb(100, 255, 100)))];

    let chars: Vec<char> = state.input.chars().collect();
    let before: String = chars[..state.cursor_pos.min(chars.len())].iter().collect();
    let after: String = chars[state.cursor_pos.min(chars.len())..].iter().collect();
    spans.push(Span::raw(before));
    spans.push(Span::styled("▏", Style::default().fg(Color::White)));
    spans.push(Span::raw(after));

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Напишите сообщение (Enter — отправить, F1 — помощь) "),
    );
    f.render_widget(input, area);
}
