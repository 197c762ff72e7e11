//! Inline formatting: escaping plus emphasis substitution for one run of text.
//!
//! The steps run in a fixed order so that later substitutions never see
//! markup introduced by earlier ones as user input:
//!
//! 1. escape `&`, `<`, `>`
//! 2. restore `<br>` tags and `&nbsp;` that the model emitted on purpose
//! 3. bold: `**text**` and `__text__`
//! 4. italic: `*text*` and `_text_`

use regex::Regex;
use std::sync::LazyLock;

static BR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)&lt;br\s*/?&gt;").expect("valid br regex"));
static NBSP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)&amp;nbsp;").expect("valid nbsp regex"));
static BOLD_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold regex"));
static BOLD_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.*?)__").expect("valid bold regex"));

/// Escape the three characters that matter inside an HTML text node.
///
/// `&` goes first so the entities produced for `<` and `>` are not escaped
/// a second time.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Format one run of text (a line or a table cell) as an HTML fragment.
///
/// Total over all inputs: unterminated markers stay as literal characters.
pub fn format_inline(text: &str) -> String {
    let html = escape_html(text);
    let html = BR_TAG.replace_all(&html, "<br />");
    let html = NBSP.replace_all(&html, " ");
    let html = BOLD_STARS.replace_all(&html, "<strong>$1</strong>");
    let html = BOLD_UNDERSCORES.replace_all(&html, "<strong>$1</strong>");
    let html = emphasize(&html, '*');
    emphasize(&html, '_')
}

/// Wrap single-marker spans in `<em>`.
///
/// A span opens at the start of the string or after whitespace or `>`, holds
/// at least one non-marker character, and closes on the next marker provided
/// that marker is not doubled.
fn emphasize(html: &str, marker: char) -> String {
    let chars: Vec<char> = html.chars().collect();
    let mut out = String::with_capacity(html.len());
    let mut i = 0;

    while i < chars.len() {
        let open = if i == 0 && chars[0] == marker {
            Some(0)
        } else if (chars[i].is_whitespace() || chars[i] == '>')
            && chars.get(i + 1) == Some(&marker)
        {
            Some(i + 1)
        } else {
            None
        };

        if let Some(open) = open {
            if let Some(close) = closing_marker(&chars, open, marker) {
                out.extend(&chars[i..open]);
                out.push_str("<em>");
                out.extend(&chars[open + 1..close]);
                out.push_str("</em>");
                i = close + 1;
                continue;
            }
        }

        out.push(chars[i]);
        i += 1;
    }

    out
}

fn closing_marker(chars: &[char], open: usize, marker: char) -> Option<usize> {
    match chars.get(open + 1) {
        None => return None,
        Some(&c) if c == marker => return None,
        Some(_) => {}
    }
    let close = open + 1 + chars[open + 1..].iter().position(|&c| c == marker)?;
    if chars.get(close + 1) == Some(&marker) {
        return None;
    }
    Some(close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_order() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("<b>"), "&lt;b&gt;");
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        let text = "Gunakan sunscreen setiap pagi";
        assert_eq!(format_inline(text), text);
        assert_eq!(format_inline(&format_inline(text)), text);
    }

    #[test]
    fn test_script_is_escaped() {
        let html = format_inline("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert_eq!(html, "&lt;script&gt;alert(1)&lt;/script&gt;");
    }

    #[test]
    fn test_br_artifacts_restored() {
        assert_eq!(format_inline("a<br>b"), "a<br />b");
        assert_eq!(format_inline("a<br/>b"), "a<br />b");
        assert_eq!(format_inline("a<BR />b"), "a<br />b");
    }

    #[test]
    fn test_nbsp_becomes_space() {
        assert_eq!(format_inline("a&nbsp;b"), "a b");
        assert_eq!(format_inline("a&NBSP;b"), "a b");
    }

    #[test]
    fn test_bold() {
        assert_eq!(format_inline("**Niacinamide**"), "<strong>Niacinamide</strong>");
        assert_eq!(format_inline("__Retinol__"), "<strong>Retinol</strong>");
        assert_eq!(
            format_inline("**a** dan **b**"),
            "<strong>a</strong> dan <strong>b</strong>"
        );
    }

    #[test]
    fn test_italic() {
        assert_eq!(format_inline("*lembut*"), "<em>lembut</em>");
        assert_eq!(format_inline("sangat *lembut* sekali"), "sangat <em>lembut</em> sekali");
        assert_eq!(format_inline("_catatan_"), "<em>catatan</em>");
    }

    #[test]
    fn test_italic_requires_boundary_before() {
        assert_eq!(format_inline("a*b*c"), "a*b*c");
        assert_eq!(format_inline("snake_case_name"), "snake_case_name");
    }

    #[test]
    fn test_bold_then_italic() {
        assert_eq!(
            format_inline("**x** *y*"),
            "<strong>x</strong> <em>y</em>"
        );
    }

    #[test]
    fn test_italic_after_tag() {
        assert_eq!(format_inline("**a***b*"), "<strong>a</strong><em>b</em>");
    }

    #[test]
    fn test_unterminated_markers_are_literal() {
        assert_eq!(format_inline("**tidak ditutup"), "**tidak ditutup");
        assert_eq!(format_inline("*tidak ditutup"), "*tidak ditutup");
        assert_eq!(format_inline("5 * 3"), "5 * 3");
        assert_eq!(format_inline("*"), "*");
        assert_eq!(format_inline("**"), "**");
    }

    #[test]
    fn test_bold_and_italic_together() {
        let html = format_inline("**hi** and *there*");
        assert!(html.contains("<strong>hi</strong>"));
        assert!(html.contains("<em>there</em>"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_inline(""), "");
    }
}
