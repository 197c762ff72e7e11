//! Line-by-line rendering of text segments.

use regex::{NoExpand, Regex};
use std::sync::LazyLock;

use crate::inline::format_inline;
use crate::options::{open_tag, FormatOptions};
use crate::segment::is_table_line;
use crate::table::render_inline_row;

/// Line break marker joining rendered lines and segments.
pub const LINE_BREAK: &str = "<br />";

static HORIZONTAL_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-{3,}\s*$").expect("valid rule regex"));
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#{1,6}\s*(.*)$").expect("valid heading regex"));
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-+\s+").expect("valid bullet regex"));
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9]+)\.\s+").expect("valid numbering regex"));
static STRAY_HASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s*").expect("valid hash regex"));

/// Render every line of a text segment and join them with [`LINE_BREAK`].
pub fn render_text_segment(content: &str, options: &FormatOptions) -> String {
    content
        .split('\n')
        .map(|line| render_line(line, options))
        .collect::<Vec<_>>()
        .join(LINE_BREAK)
}

fn render_line(line: &str, options: &FormatOptions) -> String {
    if HORIZONTAL_RULE.is_match(line) {
        return String::new();
    }

    if line.contains('|') && !is_table_line(line) {
        if let Some(row) = render_inline_row(line, &options.classes) {
            return row;
        }
    }

    let heading = HEADING
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());
    let html = format_inline(heading.unwrap_or(line));

    let bullet = format!("{} ", options.bullet);
    let html = BULLET.replace(&html, NoExpand(bullet.as_str()));
    let html = NUMBERED.replace(&html, "$1. ");
    let html = STRAY_HASHES.replace(&html, "");

    if heading.is_some() {
        format!("{}{html}</div>", open_tag("div", &options.classes.heading))
    } else {
        html.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::HtmlClasses;

    fn plain() -> FormatOptions {
        FormatOptions::new().classes(HtmlClasses::plain())
    }

    #[test]
    fn test_lines_joined_with_break() {
        assert_eq!(render_text_segment("a\nb", &plain()), "a<br />b");
        assert_eq!(render_text_segment("a\n\nb", &plain()), "a<br /><br />b");
    }

    #[test]
    fn test_horizontal_rule_suppressed() {
        assert_eq!(render_text_segment("a\n---\nb", &plain()), "a<br /><br />b");
        assert_eq!(render_text_segment("  -----  ", &plain()), "");
        assert_eq!(render_text_segment("--", &plain()), "--");
    }

    #[test]
    fn test_heading() {
        assert_eq!(render_text_segment("# Rutinitas", &plain()), "<div>Rutinitas</div>");
        assert_eq!(render_text_segment("###Pagi", &plain()), "<div>Pagi</div>");
        assert_eq!(
            render_text_segment("## **Malam**", &FormatOptions::default()),
            "<div class=\"font-semibold text-brand-dark text-sm sm:text-base\"><strong>Malam</strong></div>"
        );
    }

    #[test]
    fn test_deep_heading_strips_leftover_hashes() {
        assert_eq!(render_text_segment("######## Dalam", &plain()), "<div>Dalam</div>");
    }

    #[test]
    fn test_bullets() {
        assert_eq!(render_text_segment("- Cleanser", &plain()), "\u{2022} Cleanser");
        assert_eq!(render_text_segment("  -- Toner", &plain()), "\u{2022} Toner");
        assert_eq!(render_text_segment("-tanpa spasi", &plain()), "-tanpa spasi");
        assert_eq!(
            render_text_segment("- Serum", &plain().bullet("$1")),
            "$1 Serum"
        );
    }

    #[test]
    fn test_numbering_kept() {
        assert_eq!(render_text_segment("  1.   Cuci muka", &plain()), "1. Cuci muka");
        assert_eq!(render_text_segment("12. Tidur", &plain()), "12. Tidur");
    }

    #[test]
    fn test_lone_pipe_line_becomes_row() {
        let html = render_text_segment("Pagi | Malam", &plain());
        assert_eq!(
            html,
            "<div><table><tbody><tr><td>Pagi</td><td>Malam</td></tr></tbody></table></div>"
        );
    }

    #[test]
    fn test_pipe_line_with_one_cell_is_text() {
        assert_eq!(render_text_segment("a |", &plain()), "a |");
        assert_eq!(render_text_segment("|a|", &plain()), "|a|");
    }

    #[test]
    fn test_escaping_applies() {
        assert_eq!(render_text_segment("1 < 2 & 3 > 2", &plain()), "1 &lt; 2 &amp; 3 &gt; 2");
    }
}
