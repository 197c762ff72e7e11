//! Rendering options for the formatter.
//!
//! Options only change attribute strings and the bullet glyph. Segmentation,
//! escaping and emphasis rules are fixed.

use serde::{Deserialize, Serialize};

/// Default glyph substituted for a leading `-` bullet.
pub const DEFAULT_BULLET: &str = "\u{2022}";

/// Class attribute values for every element the formatter emits.
///
/// An empty string suppresses the `class` attribute on that element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlClasses {
    /// Scroll container around a full table
    pub table_wrapper: String,
    /// Scroll container around a single-row table
    pub inline_table_wrapper: String,
    /// The `<table>` element
    pub table: String,
    /// Each `<th>`
    pub header_cell: String,
    /// Each `<td>`
    pub body_cell: String,
    /// The `<div>` wrapping a heading line
    pub heading: String,
}

impl Default for HtmlClasses {
    fn default() -> Self {
        Self::brand()
    }
}

impl HtmlClasses {
    /// The storefront's brand styling
    pub fn brand() -> Self {
        Self {
            table_wrapper: "overflow-x-auto -mx-1 sm:mx-0".to_string(),
            inline_table_wrapper: "overflow-x-auto -mx-1 sm:mx-0 mb-2".to_string(),
            table: "min-w-full border-collapse rounded-2xl overflow-hidden text-xs sm:text-sm shadow-sm"
                .to_string(),
            header_cell: "border border-brand-primary/20 bg-brand-secondary/60 px-3 py-2 text-left text-[11px] sm:text-xs font-semibold text-brand-dark"
                .to_string(),
            body_cell: "border border-brand-primary/15 px-3 py-2 align-top text-[11px] sm:text-xs text-brand-dark"
                .to_string(),
            heading: "font-semibold text-brand-dark text-sm sm:text-base".to_string(),
        }
    }

    /// No classes at all: bare semantic HTML
    pub fn plain() -> Self {
        Self {
            table_wrapper: String::new(),
            inline_table_wrapper: String::new(),
            table: String::new(),
            header_cell: String::new(),
            body_cell: String::new(),
            heading: String::new(),
        }
    }
}

/// Options controlling how formatted content is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Glyph that replaces a leading `-` bullet
    pub bullet: String,
    /// Class attributes for emitted elements
    pub classes: HtmlClasses,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            bullet: DEFAULT_BULLET.to_string(),
            classes: HtmlClasses::default(),
        }
    }
}

impl FormatOptions {
    /// Create options with the brand defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the bullet glyph
    pub fn bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullet = bullet.into();
        self
    }

    /// Builder: set the class attributes
    pub fn classes(mut self, classes: HtmlClasses) -> Self {
        self.classes = classes;
        self
    }
}

/// Open tag for `name`, with a class attribute only when `class` is non-empty.
pub(crate) fn open_tag(name: &str, class: &str) -> String {
    if class.is_empty() {
        format!("<{name}>")
    } else {
        format!("<{name} class=\"{class}\">")
    }
}
