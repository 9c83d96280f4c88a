use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{App, Focus};

/// Render the header bar.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let mode = if app.demo_mode { "  [demo mode]" } else { "" };
    let header = Paragraph::new(format!("BlogAgent    Create Your Blog Post{}", mode))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Render the form fields: title, keywords, tone, and the submit row.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Keywords
            Constraint::Length(3), // Tone
            Constraint::Length(3), // Submit row
        ])
        .split(area);

    render_text_field(
        frame,
        chunks[0],
        "Blog Title *",
        &app.input.title,
        app.focus == Focus::Title,
    );
    render_text_field(
        frame,
        chunks[1],
        "Keywords (optional)",
        &app.input.keywords,
        app.focus == Focus::Keywords,
    );
    render_tone_field(frame, app, chunks[2]);
    render_submit_row(frame, app, chunks[3]);
}

fn render_text_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let mut text = value.to_string();
    if focused {
        text.push('\u{2588}'); // block cursor
    }
    let field = Paragraph::new(text).block(titled_block(label, focused));
    frame.render_widget(field, area);
}

fn render_tone_field(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Tone;
    let value = match app.input.tone {
        Some(tone) => format!("< {} >", tone.label()),
        None => "< Neutral (default) >".to_string(),
    };
    let field = Paragraph::new(value).block(titled_block("Tone (optional)", focused));
    frame.render_widget(field, area);
}

fn render_submit_row(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Submit;
    let label = if app.state.is_loading() {
        "Generating Blog Post..."
    } else {
        "[ Generate Blog Post ]"
    };
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let row = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(row, area);
}

fn titled_block(label: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(label.to_string())
}

/// Render the flash notification, or the key help when no flash is up.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.flash {
        Some(flash) => {
            let color = if flash.is_error {
                Color::Red
            } else {
                Color::Green
            };
            (
                flash.message.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => (
            "Tab: next field   \u{2190}/\u{2192}: tone   Ctrl+Enter: generate   \
             \u{2191}/\u{2193}: scroll   Esc: quit"
                .to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };
    let footer = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
