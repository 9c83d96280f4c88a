//! Markdown to terminal text.
//!
//! Maps the core block model onto styled ratatui lines. Block markers
//! (`#`, `-`, `1.`, `>`) are kept in the output so the document reads
//! the same as its source; inline emphasis delimiters are consumed and
//! replaced by text styling.

use ratatui::prelude::*;

use blogagent_core::markdown::{parse_spans, LineKind, MarkdownDoc, MarkdownLine, SpanStyle};

/// Render markdown `content` as styled terminal text.
#[must_use]
pub fn render_markdown(content: &str) -> Text<'static> {
    let doc = MarkdownDoc::parse(content);
    let lines = doc.lines.iter().map(render_line).collect::<Vec<_>>();
    Text::from(lines)
}

fn render_line(line: &MarkdownLine) -> Line<'static> {
    match line.kind {
        LineKind::Heading(1) => Line::from(Span::styled(
            line.raw.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        LineKind::Heading(_) => {
            Line::from(Span::styled(line.raw.clone(), Style::default().fg(Color::Cyan)))
        }
        LineKind::Bullet | LineKind::Ordered => styled_with_marker(line, Style::default()),
        LineKind::Blockquote => styled_with_marker(
            line,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
        LineKind::Fence => Line::from(Span::styled(
            line.raw.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        LineKind::Code => {
            Line::from(Span::styled(line.raw.clone(), Style::default().fg(Color::Yellow)))
        }
        LineKind::Rule => Line::from(Span::styled(
            line.raw.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        LineKind::Blank => Line::raw(""),
        LineKind::Paragraph => Line::from(inline_spans(&line.raw, Style::default())),
    }
}

/// Keep the block marker verbatim, then style the remaining text inline.
fn styled_with_marker(line: &MarkdownLine, base: Style) -> Line<'static> {
    let text = line.text();
    let marker = &line.raw[..line.raw.len() - text.len()];

    let mut spans = vec![Span::styled(
        marker.to_string(),
        Style::default().fg(Color::Cyan),
    )];
    spans.extend(inline_spans(text, base));
    Line::from(spans)
}

fn inline_spans(text: &str, base: Style) -> Vec<Span<'static>> {
    parse_spans(text)
        .into_iter()
        .map(|span| {
            let style = match span.style {
                SpanStyle::Plain => base,
                SpanStyle::Strong => base.add_modifier(Modifier::BOLD),
                SpanStyle::Emphasis => base.add_modifier(Modifier::ITALIC),
                SpanStyle::Code => base.fg(Color::Yellow),
            };
            Span::styled(span.text, style)
        })
        .collect()
}
