//! Splitting raw text into table and text segments.
//!
//! One left-to-right pass over the lines. A maximal run of table lines
//! becomes a [`SegmentKind::Table`] segment; everything between runs is
//! collected into [`SegmentKind::Text`] segments. Contents are the raw lines
//! joined by `\n`, so the partition is lossless.

use serde::{Deserialize, Serialize};

/// Classification of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// A run of consecutive pipe-delimited lines
    Table,
    /// Everything else
    Text,
}

/// A contiguous run of lines classified uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Raw lines of the segment joined by `\n`
    pub content: String,
}

impl Segment {
    fn new(kind: SegmentKind, lines: &[&str]) -> Self {
        Self {
            kind,
            content: lines.join("\n"),
        }
    }

    /// Lines of the segment, in order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.content.split('\n')
    }
}

/// A line whose trimmed form starts with `|` and has more than two
/// `|`-delimited fields.
pub fn is_table_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|') && trimmed.split('|').count() > 3
}

/// Partition `text` into ordered segments. Empty input yields no segments.
pub fn segment(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let mut segments = Vec::new();
    let mut buffer_start = 0;
    let mut i = 0;

    while i < lines.len() {
        if !is_table_line(lines[i]) {
            i += 1;
            continue;
        }

        if buffer_start < i {
            segments.push(Segment::new(SegmentKind::Text, &lines[buffer_start..i]));
        }
        let start = i;
        while i < lines.len() && is_table_line(lines[i]) {
            i += 1;
        }
        segments.push(Segment::new(SegmentKind::Table, &lines[start..i]));
        buffer_start = i;
    }

    if buffer_start < lines.len() {
        segments.push(Segment::new(SegmentKind::Text, &lines[buffer_start..]));
    }

    tracing::trace!(lines = lines.len(), segments = segments.len(), "segmented text");
    segments
}
