//! Rendering of pipe-delimited tables.

use regex::Regex;
use std::sync::LazyLock;

use crate::inline::format_inline;
use crate::options::{open_tag, HtmlClasses};

static SEPARATOR_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\|?(?:\s*:?-+:?\s*\|)+\s*$").expect("valid separator regex")
});

/// A header boundary row such as `|---|:---:|`.
pub fn is_separator_line(line: &str) -> bool {
    SEPARATOR_LINE.is_match(line)
}

/// Split a row into trimmed cells, dropping one leading and one trailing pipe.
pub fn parse_row(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}

/// Render a block of table lines.
///
/// The block needs a header row followed by a separator row; otherwise the
/// lines come back joined by `\n` with no escaping and no markup. Rows are
/// not checked against the header's column count.
pub fn render_table(lines: &[&str], classes: &HtmlClasses) -> String {
    if lines.len() < 2 || !is_separator_line(lines[1]) {
        tracing::debug!(lines = lines.len(), "table block has no separator row, emitting raw");
        return lines.join("\n");
    }

    let th = open_tag("th", &classes.header_cell);
    let header: String = parse_row(lines[0])
        .iter()
        .map(|cell| format!("{th}{}</th>", format_inline(cell)))
        .collect();

    let td = open_tag("td", &classes.body_cell);
    let body: String = lines[2..]
        .iter()
        .map(|line| {
            let cells: String = parse_row(line)
                .iter()
                .map(|cell| format!("{td}{}</td>", format_inline(cell)))
                .collect();
            format!("<tr>{cells}</tr>")
        })
        .collect();

    format!(
        "{}{}<thead><tr>{header}</tr></thead><tbody>{body}</tbody></table></div>",
        open_tag("div", &classes.table_wrapper),
        open_tag("table", &classes.table),
    )
}

/// Render a lone pipe-delimited line as a one-row table with no header.
///
/// Empty cells are dropped. Returns `None` when fewer than two cells remain,
/// in which case the line is ordinary text.
pub fn render_inline_row(line: &str, classes: &HtmlClasses) -> Option<String> {
    let cells: Vec<&str> = line
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect();
    if cells.len() < 2 {
        tracing::trace!(cells = cells.len(), "pipe line is not a row");
        return None;
    }

    let td = open_tag("td", &classes.body_cell);
    let tds: String = cells
        .iter()
        .map(|cell| format!("{td}{}</td>", format_inline(cell)))
        .collect();

    Some(format!(
        "{}{}<tbody><tr>{tds}</tr></tbody></table></div>",
        open_tag("div", &classes.inline_table_wrapper),
        open_tag("table", &classes.table),
    ))
}
