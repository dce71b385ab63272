//! Markdown subset renderer for digest bodies.
//!
//! The pipeline writes short mini-articles using a deliberately small subset
//! of markdown:
//!
//! | Block | Syntax |
//! |-------|--------|
//! | Horizontal rule | a line of 3+ `-`, `*` or `_` |
//! | Heading | first line of a block: `##` to `####` followed by text |
//! | Bullet list | every line starts with `-`, `*` or `+` |
//! | Numbered list | every line starts with `N.` or `N)` |
//! | Paragraph | anything else; line breaks are kept |
//!
//! Inline: `` `code` ``, `***both***`, `**bold**`, `*italic*`.
//!
//! Content is escaped before any markup is inserted, and the assembled
//! fragment is then run through `ammonia` restricted to the tags emitted here.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Tags the renderer is allowed to produce.
const ALLOWED_TAGS: &[&str] = &[
    "p", "br", "hr", "h2", "h3", "h4", "ul", "ol", "li", "strong", "em", "code",
];

static RULE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})$")
        .expect("rule pattern is valid")
});

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{2,4})\s+(\S.*)$").expect("heading pattern is valid"));

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+(\S.*)$").expect("bullet pattern is valid"));

static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s+(\S.*)$").expect("numbered pattern is valid"));

static CODE_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("code span pattern is valid"));

static CODE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x{E000}(\d+)\x{E001}").expect("code placeholder pattern is valid")
});

static STRONG_EM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*\*([^\s*](?:[^*]*?[^\s*])?)\*\*\*").expect("strong emphasis pattern is valid")
});

// Inner text may hold single-asterisk emphasis but must not start or end
// with whitespace or `*`.
static BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^\s*](?:.*?[^\s*])?)\*\*").expect("bold pattern is valid")
});

// Runs after BOLD, so any remaining `*` pairs are single-asterisk emphasis.
static ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*([^*\s<](?:[^*<]*[^*\s<])?)\*").expect("italic pattern is valid")
});

/// Delimiters of a masked code span while emphasis is applied.
const CODE_OPEN: char = '\u{E000}';
const CODE_CLOSE: char = '\u{E001}';

/// A classified run of non-blank lines.
#[derive(Debug, PartialEq)]
enum Block<'a> {
    Rule,
    Heading { level: usize, text: &'a str },
    Bullets(Vec<&'a str>),
    Numbered(Vec<&'a str>),
    Paragraph(Vec<&'a str>),
}

/// Convert a digest body to sanitized HTML.
pub fn render_markdown(text: &str) -> String {
    let html = split_blocks(text)
        .iter()
        .flat_map(|lines| classify(lines))
        .map(|block| render_block(&block))
        .collect::<Vec<_>>()
        .join("\n");

    sanitize(&html)
}

/// Escape and apply inline formatting only, without block wrapping.
///
/// Used for titles, which must not gain paragraph markup.
pub fn render_inline(text: &str) -> String {
    sanitize(&format_inline(text.trim()))
}

/// Escape text for HTML text or quoted attribute context.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_safe(text).into_owned()
}

/// Split on blank lines; each block is a list of trimmed, non-empty lines.
fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Classify a block. A leading heading line is split off so that text
/// written directly under a heading still renders as its own block.
fn classify<'a>(lines: &[&'a str]) -> Vec<Block<'a>> {
    let Some((first, rest)) = lines.split_first() else {
        return Vec::new();
    };

    if rest.is_empty() && RULE.is_match(first) {
        return vec![Block::Rule];
    }

    if let Some(caps) = HEADING.captures(first) {
        let level = caps.get(1).map_or(2, |m| m.as_str().len());
        let text = caps.get(2).map_or("", |m| m.as_str());
        let mut blocks = vec![Block::Heading { level, text }];
        blocks.extend(classify(rest));
        return blocks;
    }

    if let Some(items) = uniform_items(lines, &BULLET) {
        return vec![Block::Bullets(items)];
    }

    if let Some(items) = uniform_items(lines, &NUMBERED) {
        return vec![Block::Numbered(items)];
    }

    vec![Block::Paragraph(lines.to_vec())]
}

/// Item texts when every line matches `marker`, markers stripped.
fn uniform_items<'a>(lines: &[&'a str], marker: &Regex) -> Option<Vec<&'a str>> {
    lines
        .iter()
        .map(|line| {
            marker
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
        })
        .collect()
}

fn render_block(block: &Block<'_>) -> String {
    match block {
        Block::Rule => "<hr>".to_string(),
        Block::Heading { level, text } => {
            format!("<h{level}>{}</h{level}>", format_inline(text))
        }
        Block::Bullets(items) => format!("<ul>{}</ul>", render_items(items)),
        Block::Numbered(items) => format!("<ol>{}</ol>", render_items(items)),
        Block::Paragraph(lines) => {
            let body = lines
                .iter()
                .map(|line| format_inline(line))
                .collect::<Vec<_>>()
                .join("<br>");
            format!("<p>{}</p>", body)
        }
    }
}

fn render_items(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("<li>{}</li>", format_inline(item)))
        .collect()
}

/// Escape `text`, then turn code spans, bold and italic into markup.
///
/// Code spans are masked while emphasis runs over the whole line, so bold
/// may wrap a code span while the span's own contents never receive
/// emphasis.
fn format_inline(text: &str) -> String {
    let escaped = escape_html(text).replace([CODE_OPEN, CODE_CLOSE], "");

    let mut spans: Vec<String> = Vec::new();
    let masked = CODE_SPAN.replace_all(&escaped, |caps: &Captures<'_>| {
        spans.push(caps[1].to_string());
        format!("{CODE_OPEN}{}{CODE_CLOSE}", spans.len() - 1)
    });

    let formatted = format_emphasis(&masked);

    CODE_PLACEHOLDER
        .replace_all(&formatted, |caps: &Captures<'_>| {
            let code = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| spans.get(i))
                .map_or("", String::as_str);
            format!("<code>{}</code>", code)
        })
        .into_owned()
}

fn format_emphasis(text: &str) -> String {
    let strong_em = STRONG_EM.replace_all(text, "<strong><em>$1</em></strong>");
    let bold = BOLD.replace_all(&strong_em, "<strong>$1</strong>");
    ITALIC.replace_all(&bold, "<em>$1</em>").into_owned()
}

fn sanitize(html: &str) -> String {
    ammonia::Builder::default()
        .tags(ALLOWED_TAGS.iter().copied().collect::<HashSet<_>>())
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraph() {
        assert_eq!(render_markdown("Hello world"), "<p>Hello world</p>");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_markdown(""), "");
        assert_eq!(render_markdown("\n  \n\n"), "");
    }

    #[test]
    fn test_script_is_escaped() {
        let html = render_markdown("<script>alert('x')</script>");
        assert!(!html.contains("<script"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.starts_with("<p>"));
    }

    #[test]
    fn test_markup_in_list_and_code_is_escaped() {
        let html = render_markdown("- <img src=x onerror=alert(1)>\n- `<b>`");
        assert!(!html.contains("<img"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("<code>&lt;b&gt;</code>"));
    }

    #[test]
    fn test_bullet_list() {
        assert_eq!(
            render_markdown("- one\n- two\n- three"),
            "<ul><li>one</li><li>two</li><li>three</li></ul>"
        );
        assert_eq!(
            render_markdown("* one\n+ two"),
            "<ul><li>one</li><li>two</li></ul>"
        );
    }

    #[test]
    fn test_numbered_list() {
        assert_eq!(
            render_markdown("1. first\n2. second"),
            "<ol><li>first</li><li>second</li></ol>"
        );
        assert_eq!(
            render_markdown("1) first\n2) second"),
            "<ol><li>first</li><li>second</li></ol>"
        );
    }

    #[test]
    fn test_mixed_lines_are_a_paragraph() {
        assert_eq!(
            render_markdown("- one\nnot an item"),
            "<p>- one<br>not an item</p>"
        );
    }

    #[test]
    fn test_paragraph_line_breaks() {
        assert_eq!(
            render_markdown("line one\nline two"),
            "<p>line one<br>line two</p>"
        );
    }

    #[test]
    fn test_blocks_split_on_blank_lines() {
        assert_eq!(
            render_markdown("First\r\n\r\n   \r\nSecond"),
            "<p>First</p>\n<p>Second</p>"
        );
    }

    #[test]
    fn test_headings() {
        assert_eq!(render_markdown("## Title"), "<h2>Title</h2>");
        assert_eq!(render_markdown("#### Deep"), "<h4>Deep</h4>");
        assert_eq!(render_markdown("# Too big"), "<p># Too big</p>");
        assert_eq!(render_markdown("##### Too deep"), "<p>##### Too deep</p>");
        assert_eq!(render_markdown("##nospace"), "<p>##nospace</p>");
    }

    #[test]
    fn test_heading_followed_by_text() {
        assert_eq!(
            render_markdown("### Why it matters\nIt is fast."),
            "<h3>Why it matters</h3>\n<p>It is fast.</p>"
        );
    }

    #[test]
    fn test_horizontal_rules() {
        assert_eq!(render_markdown("---"), "<hr>");
        assert_eq!(render_markdown("* * *"), "<hr>");
        assert_eq!(render_markdown("_____"), "<hr>");
        assert_eq!(render_markdown("--"), "<p>--</p>");
        assert_eq!(render_markdown("-*-"), "<p>-*-</p>");
    }

    #[test]
    fn test_bold_and_italic() {
        assert_eq!(
            render_markdown("**bold** and *italic*"),
            "<p><strong>bold</strong> and <em>italic</em></p>"
        );
    }

    #[test]
    fn test_bold_wrapping_code_span() {
        assert_eq!(
            render_markdown("**Announcing `uv` 0.5** caught attention"),
            "<p><strong>Announcing <code>uv</code> 0.5</strong> caught attention</p>"
        );
        assert_eq!(
            render_inline("**`tokio` 2.0 lands**"),
            "<strong><code>tokio</code> 2.0 lands</strong>"
        );
    }

    #[test]
    fn test_italic_nested_in_bold() {
        assert_eq!(
            render_markdown("**very *important* thing**"),
            "<p><strong>very <em>important</em> thing</strong></p>"
        );
        assert_eq!(
            render_markdown("***x***"),
            "<p><strong><em>x</em></strong></p>"
        );
    }

    #[test]
    fn test_two_bold_runs_stay_separate() {
        assert_eq!(
            render_markdown("**a** and **b**"),
            "<p><strong>a</strong> and <strong>b</strong></p>"
        );
    }

    #[test]
    fn test_asterisks_without_emphasis() {
        assert_eq!(render_markdown("2 * 3 * 4"), "<p>2 * 3 * 4</p>");
    }

    #[test]
    fn test_code_span_protects_contents() {
        assert_eq!(
            render_markdown("Use `**kwargs` here"),
            "<p>Use <code>**kwargs</code> here</p>"
        );
    }

    #[test]
    fn test_inline_formatting_in_list_items() {
        assert_eq!(
            render_markdown("1. **Rust** 1.85\n2. `cargo` *fast*"),
            "<ol><li><strong>Rust</strong> 1.85</li><li><code>cargo</code> <em>fast</em></li></ol>"
        );
    }

    #[test]
    fn test_render_inline_has_no_block_markup() {
        assert_eq!(
            render_inline("  **Rust** in the kernel "),
            "<strong>Rust</strong> in the kernel"
        );
        assert!(!render_inline("<em>x</em>").contains("<em>"));
    }

    #[test]
    fn test_classify_order() {
        assert_eq!(classify(&["---"]), vec![Block::Rule]);
        assert_eq!(
            classify(&["- a", "- b"]),
            vec![Block::Bullets(vec!["a", "b"])]
        );
        assert_eq!(
            classify(&["10. a", "11) b"]),
            vec![Block::Numbered(vec!["a", "b"])]
        );
        assert_eq!(
            classify(&["---", "text"]),
            vec![Block::Paragraph(vec!["---", "text"])]
        );
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"q\""), "&quot;q&quot;");
    }
}
