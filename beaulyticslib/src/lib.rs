//! # beaulyticslib
//!
//! Turns free-form AI output (chat replies and skin diagnosis reports) into
//! HTML fragments that are safe to drop into a chat bubble or report panel.
//!
//! ## Overview
//!
//! The model writes loosely in Markdown. This library understands the subset
//! that actually shows up and renders it deterministically:
//!
//! - **Tables**: runs of `|`-delimited lines with a `|---|` separator row
//! - **Lone pipe rows**: a single `a | b` line renders as a one-row table
//! - **Headings**: `#` to `######`
//! - **Lists**: `-` bullets become a glyph, `1.` numbering is kept
//! - **Emphasis**: `**bold**`, `__bold__`, `*italic*`, `_italic_`
//! - **Horizontal rules**: `---` lines are dropped
//!
//! All text is HTML-escaped before any markup is introduced. Formatting never
//! fails: anything that does not parse is emitted as literal text.
//!
//! ## Example
//!
//! ```rust
//! use beaulyticslib::{format_content, FormatOptions, Formatter, HtmlClasses};
//!
//! let html = format_content("**Niacinamide** cocok untuk *kulit berminyak*");
//! assert_eq!(
//!     html,
//!     "<strong>Niacinamide</strong> cocok untuk <em>kulit berminyak</em>"
//! );
//!
//! let formatter = Formatter::new(FormatOptions::new().classes(HtmlClasses::plain()));
//! let html = formatter.format("# Rutinitas\n- Cleanser");
//! assert_eq!(html, "<div>Rutinitas</div><br />\u{2022} Cleanser");
//! ```

pub mod error;
pub mod format;
pub mod inline;
pub mod lines;
pub mod message;
pub mod options;
pub mod segment;
pub mod table;

pub use error::BeaulyticsError;
pub use format::{format_content, Formatter};
pub use inline::{escape_html, format_inline};
pub use lines::{render_text_segment, LINE_BREAK};
pub use message::{
    inject_context, parse_messages, AiReply, AiRequest, ChatMessage, ContentPart, MessageContent,
    Mode, Role,
};
pub use options::{FormatOptions, HtmlClasses, DEFAULT_BULLET};
pub use segment::{is_table_line, segment, Segment, SegmentKind};
pub use table::{is_separator_line, parse_row, render_inline_row, render_table};

/// Result type for beaulyticslib operations
pub type Result<T> = std::result::Result<T, BeaulyticsError>;
