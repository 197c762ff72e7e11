//! The formatting pipeline: segment, render each segment, join.

use serde::{Deserialize, Serialize};

use crate::lines::{render_text_segment, LINE_BREAK};
use crate::options::FormatOptions;
use crate::segment::{segment, Segment, SegmentKind};
use crate::table::render_table;

/// Formats chat messages and diagnosis reports into HTML fragments.
///
/// Holds only rendering options, so one value can be shared freely across
/// threads and calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Format `text` as one HTML fragment.
    ///
    /// Input is trimmed first. Empty or whitespace-only input yields an
    /// empty string.
    pub fn format(&self, text: &str) -> String {
        segment(text.trim())
            .iter()
            .map(|seg| self.render_segment(seg))
            .collect::<Vec<_>>()
            .join(LINE_BREAK)
    }

    /// Render a single segment
    pub fn render_segment(&self, seg: &Segment) -> String {
        match seg.kind {
            SegmentKind::Table => {
                let lines: Vec<&str> = seg.lines().collect();
                render_table(&lines, &self.options.classes)
            }
            SegmentKind::Text => render_text_segment(&seg.content, &self.options),
        }
    }
}

/// Format `text` with the default brand options.
pub fn format_content(text: &str) -> String {
    Formatter::default().format(text)
}
