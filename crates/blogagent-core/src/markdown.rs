//! Line-oriented markdown block model.
//!
//! Generated blog content arrives as markdown text. The renderer in the
//! CLI needs just enough structure to style headings, list items, block
//! quotes, fenced code, and inline emphasis; it does not need a full
//! CommonMark implementation. This module classifies the document line
//! by line, keeping every raw line intact so that reassembling the
//! parsed document reproduces the input byte for byte.

/// How a single source line should be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `# ...` through `###### ...`; level is the number of `#` marks.
    Heading(u8),
    /// `- item`, `* item`, or `+ item`.
    Bullet,
    /// `1. item` style ordered list entry.
    Ordered,
    /// `> quoted`.
    Blockquote,
    /// Opening or closing ``` fence.
    Fence,
    /// A line inside a fenced code block.
    Code,
    /// `---`, `***`, or `___` horizontal rule.
    Rule,
    Blank,
    Paragraph,
}

/// One classified source line. `raw` is the line exactly as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownLine {
    pub raw: String,
    pub kind: LineKind,
}

impl MarkdownLine {
    /// The line's content with its block marker stripped, for styling.
    /// Headings lose the `#` prefix, list items their bullet/number,
    /// quotes their `>`. Other kinds return the raw line unchanged.
    #[must_use]
    pub fn text(&self) -> &str {
        let trimmed = self.raw.trim_start();
        match self.kind {
            LineKind::Heading(level) => trimmed[usize::from(level)..].trim_start(),
            LineKind::Bullet => trimmed[1..].trim_start(),
            LineKind::Ordered => trimmed
                .split_once(". ")
                .map_or(trimmed, |(_, rest)| rest),
            LineKind::Blockquote => trimmed[1..].trim_start(),
            _ => &self.raw,
        }
    }
}

/// A parsed markdown document: the classified lines, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarkdownDoc {
    pub lines: Vec<MarkdownLine>,
}

impl MarkdownDoc {
    /// Classify `source` line by line.
    #[must_use]
    pub fn parse(source: &str) -> Self {
        let mut lines = Vec::new();
        let mut in_fence = false;

        for raw in source.split('\n') {
            let kind = if is_fence(raw) {
                in_fence = !in_fence;
                LineKind::Fence
            } else if in_fence {
                LineKind::Code
            } else {
                classify(raw)
            };
            lines.push(MarkdownLine {
                raw: raw.to_string(),
                kind,
            });
        }

        Self { lines }
    }

    /// Reassemble the original source. This is the exact inverse of
    /// [`MarkdownDoc::parse`]: output equals input byte for byte.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let raws: Vec<&str> = self.lines.iter().map(|l| l.raw.as_str()).collect();
        raws.join("\n")
    }
}

fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with("```")
}

fn classify(line: &str) -> LineKind {
    let trimmed = line.trim_start();

    if trimmed.is_empty() {
        return LineKind::Blank;
    }
    if let Some(level) = heading_level(trimmed) {
        return LineKind::Heading(level);
    }
    if is_rule(trimmed) {
        return LineKind::Rule;
    }
    if matches!(trimmed.as_bytes(), [b'-' | b'*' | b'+', b' ', ..]) {
        return LineKind::Bullet;
    }
    if is_ordered(trimmed) {
        return LineKind::Ordered;
    }
    if trimmed.starts_with('>') {
        return LineKind::Blockquote;
    }
    LineKind::Paragraph
}

fn heading_level(trimmed: &str) -> Option<u8> {
    let hashes = trimmed.bytes().take_while(|b| *b == b'#').count();
    if (1..=6).contains(&hashes) && matches!(trimmed.as_bytes().get(hashes), None | Some(&b' ')) {
        u8::try_from(hashes).ok()
    } else {
        None
    }
}

fn is_rule(trimmed: &str) -> bool {
    for marker in ['-', '*', '_'] {
        let count = trimmed.chars().filter(|c| *c == marker).count();
        if count >= 3 && trimmed.chars().all(|c| c == marker || c == ' ') {
            return true;
        }
    }
    false
}

fn is_ordered(trimmed: &str) -> bool {
    let digits = trimmed.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && trimmed.as_bytes().get(digits) == Some(&b'.')
}

/// Inline emphasis within a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Plain,
    /// `**strong**`
    Strong,
    /// `*emphasis*`
    Emphasis,
    /// `` `code` ``
    Code,
}

/// A run of styled text. `text` excludes the delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub text: String,
    pub style: SpanStyle,
}

impl InlineSpan {
    fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// The span as markdown, delimiters restored.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        match self.style {
            SpanStyle::Plain => self.text.clone(),
            SpanStyle::Strong => format!("**{}**", self.text),
            SpanStyle::Emphasis => format!("*{}*", self.text),
            SpanStyle::Code => format!("`{}`", self.text),
        }
    }
}

/// Split a line of text into styled spans.
///
/// Unterminated delimiters are kept as literal text, so reassembling the
/// spans with [`InlineSpan::to_markdown`] always reproduces the input.
#[must_use]
pub fn parse_spans(text: &str) -> Vec<InlineSpan> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '`' {
            if let Some(end) = find(&chars, i + 1, "`") {
                flush(&mut spans, &mut plain);
                spans.push(InlineSpan::new(collect(&chars, i + 1, end), SpanStyle::Code));
                i = end + 1;
                continue;
            }
        } else if chars[i] == '*' && chars.get(i + 1) == Some(&'*') {
            if let Some(end) = find(&chars, i + 2, "**") {
                flush(&mut spans, &mut plain);
                spans.push(InlineSpan::new(
                    collect(&chars, i + 2, end),
                    SpanStyle::Strong,
                ));
                i = end + 2;
                continue;
            }
        } else if chars[i] == '*' {
            if let Some(end) = find(&chars, i + 1, "*") {
                flush(&mut spans, &mut plain);
                spans.push(InlineSpan::new(
                    collect(&chars, i + 1, end),
                    SpanStyle::Emphasis,
                ));
                i = end + 1;
                continue;
            }
        }
        plain.push(chars[i]);
        i += 1;
    }

    flush(&mut spans, &mut plain);
    spans
}

fn flush(spans: &mut Vec<InlineSpan>, plain: &mut String) {
    if !plain.is_empty() {
        spans.push(InlineSpan::new(std::mem::take(plain), SpanStyle::Plain));
    }
}

fn collect(chars: &[char], start: usize, end: usize) -> String {
    chars[start..end].iter().collect()
}

/// Find the start index of `delim` in `chars` at or after `from`.
fn find(chars: &[char], from: usize, delim: &str) -> Option<usize> {
    let delim: Vec<char> = delim.chars().collect();
    let mut i = from;
    while i + delim.len() <= chars.len() {
        if chars[i..i + delim.len()] == delim[..] {
            return Some(i);
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# Rust\n\n*Keywords: async*\n\n## Key Points\n\n1. **First**: intro.\n2. Second.\n\n- one\n- two\n\n> quoted\n\n```\nlet x = 1;\n```\n\n---\n\nDone.";

    #[test]
    fn test_roundtrip_is_verbatim() {
        let doc = MarkdownDoc::parse(SAMPLE);
        assert_eq!(doc.to_markdown(), SAMPLE);
    }

    #[test]
    fn test_roundtrip_trailing_newline() {
        let source = "# Title\n\nbody\n";
        assert_eq!(MarkdownDoc::parse(source).to_markdown(), source);
    }

    #[test]
    fn test_heading_levels() {
        let doc = MarkdownDoc::parse("# one\n### three");
        assert_eq!(doc.lines[0].kind, LineKind::Heading(1));
        assert_eq!(doc.lines[0].text(), "one");
        assert_eq!(doc.lines[1].kind, LineKind::Heading(3));
    }

    #[test]
    fn test_not_a_heading_without_space() {
        let doc = MarkdownDoc::parse("#hashtag");
        assert_eq!(doc.lines[0].kind, LineKind::Paragraph);
    }

    #[test]
    fn test_list_kinds() {
        let doc = MarkdownDoc::parse("- a\n* b\n1. c");
        assert_eq!(doc.lines[0].kind, LineKind::Bullet);
        assert_eq!(doc.lines[1].kind, LineKind::Bullet);
        assert_eq!(doc.lines[2].kind, LineKind::Ordered);
        assert_eq!(doc.lines[2].text(), "c");
    }

    #[test]
    fn test_rule_vs_bullet() {
        let doc = MarkdownDoc::parse("---\n- item");
        assert_eq!(doc.lines[0].kind, LineKind::Rule);
        assert_eq!(doc.lines[1].kind, LineKind::Bullet);
    }

    #[test]
    fn test_fenced_code_suspends_classification() {
        let doc = MarkdownDoc::parse("```\n# not a heading\n```");
        assert_eq!(doc.lines[0].kind, LineKind::Fence);
        assert_eq!(doc.lines[1].kind, LineKind::Code);
        assert_eq!(doc.lines[2].kind, LineKind::Fence);
    }

    #[test]
    fn test_spans_styles() {
        let spans = parse_spans("a **b** *c* `d`");
        let styles: Vec<SpanStyle> = spans.iter().map(|s| s.style).collect();
        assert_eq!(
            styles,
            vec![
                SpanStyle::Plain,
                SpanStyle::Strong,
                SpanStyle::Plain,
                SpanStyle::Emphasis,
                SpanStyle::Plain,
                SpanStyle::Code,
            ]
        );
        assert_eq!(spans[1].text, "b");
    }

    #[test]
    fn test_spans_reassemble_verbatim() {
        for line in [
            "plain",
            "**strong** and *emph* and `code`",
            "unterminated *star",
            "stray ` backtick",
            "1. **First Important Aspect**: details",
        ] {
            let rebuilt: String = parse_spans(line).iter().map(InlineSpan::to_markdown).collect();
            assert_eq!(rebuilt, line);
        }
    }
}
