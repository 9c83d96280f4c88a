use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use blogagent_core::UiState;

use super::markdown::render_markdown;
use super::App;

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Render the output panel for the current submission state. The three
/// terminal panels (loading, failed, succeeded) are mutually exclusive.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match &app.state {
        UiState::Idle => render_idle(frame, area),
        UiState::Loading => render_loading(frame, app, area),
        UiState::Failed(error) => render_failed(frame, &error.message, area),
        UiState::Succeeded(result) => render_succeeded(frame, app, &result.content, area),
    }
}

fn render_idle(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new("Fill in the details above and press Ctrl+Enter to generate.")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(hint, area);
}

fn render_loading(frame: &mut Frame, app: &App, area: Rect) {
    let spinner = SPINNER[app.tick % SPINNER.len()];
    let text = format!("{} Crafting your blog post...", spinner);
    let loading = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(loading, area);
}

fn render_failed(frame: &mut Frame, message: &str, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Error generating blog post",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Red))),
    ];
    let error = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(error, area);
}

fn render_succeeded(frame: &mut Frame, app: &App, content: &str, area: Rect) {
    let title = if app.demo_mode {
        "Generated Blog Post (demo)"
    } else {
        "Generated Blog Post"
    };
    let post = Paragraph::new(render_markdown(content))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(post, area);
}
