//! Paragraph and text-level types.

use super::Rgb;
use serde::{Deserialize, Serialize};

/// A paragraph of styled text runs.
///
/// Runs are append-only: helpers may restyle a run after creating it, but
/// never remove or reorder runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    runs: Vec<TextRun>,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            style: ParagraphStyle::default(),
        }
    }

    /// Create a paragraph holding one plain run.
    ///
    /// An empty string still produces a run, so styling helpers that walk
    /// runs always have something to act on.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Create a heading paragraph.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        let mut p = Self::with_text(text);
        p.style.heading_level = Some(level.clamp(1, 6));
        p
    }

    /// Create a bulleted list item at the given nesting level (0 = top).
    pub fn bullet(text: impl Into<String>, level: u8) -> Self {
        let mut p = Self::with_text(text);
        p.style.list_info = Some(ListInfo::bullet(level));
        p
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    /// Append plain text and return the new run.
    pub fn add_text(&mut self, text: impl Into<String>) -> &mut TextRun {
        self.add_run(TextRun::new(text))
    }

    /// Append a styled run and return it.
    pub fn add_run(&mut self, run: TextRun) -> &mut TextRun {
        self.runs.push(run);
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Runs in order.
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Mutable access to existing runs, for restyling.
    pub fn runs_mut(&mut self) -> impl Iterator<Item = &mut TextRun> {
        self.runs.iter_mut()
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty() || self.plain_text().trim().is_empty()
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.style.heading_level.is_some()
    }

    /// Get the heading level (1-6) or None.
    pub fn heading_level(&self) -> Option<u8> {
        self.style.heading_level
    }

    /// Check if this is a list item.
    pub fn is_list_item(&self) -> bool {
        self.style.list_info.is_some()
    }

    /// Check if this is a preformatted code block.
    pub fn is_code_block(&self) -> bool {
        self.style.preformatted
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Text styling
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle {
                bold: true,
                ..Default::default()
            },
        }
    }

    /// Set the colour and return self.
    pub fn color(mut self, color: Rgb) -> Self {
        self.style.color = Some(color);
        self
    }

    /// Set the font size in points and return self.
    pub fn size(mut self, points: f32) -> Self {
        self.style.font_size = Some(points);
        self
    }

    /// Set the font family and return self.
    pub fn font(mut self, name: impl Into<String>) -> Self {
        self.style.font_name = Some(name.into());
        self
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Text styling properties. `None` means "inherit from the document default".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Font name
    pub font_name: Option<String>,

    /// Font size in points
    pub font_size: Option<f32>,

    /// Text colour
    pub color: Option<Rgb>,
}

impl TextStyle {
    /// Check if any emphasis is applied.
    pub fn has_styling(&self) -> bool {
        self.bold || self.italic
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Heading level (1-6) or None for normal paragraph
    pub heading_level: Option<u8>,

    /// Text alignment
    pub alignment: Alignment,

    /// List information if this is a list item
    pub list_info: Option<ListInfo>,

    /// Monospace block whose newlines are significant
    pub preformatted: bool,

    /// Space before paragraph in points
    pub space_before: Option<f32>,

    /// Space after paragraph in points
    pub space_after: Option<f32>,

    /// Left indent in centimetres
    pub left_indent_cm: Option<f32>,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

/// Bulleted list membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInfo {
    /// Nesting level (0 = top level)
    pub level: u8,
}

impl ListInfo {
    /// Create a new bulleted list item.
    pub fn bullet(level: u8) -> Self {
        Self { level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let mut p = Paragraph::new();
        p.add_text("Hello ");
        p.add_run(TextRun::bold("world"));
        p.add_text("!");

        assert_eq!(p.plain_text(), "Hello world!");
        assert_eq!(p.runs().len(), 3);
    }

    #[test]
    fn test_with_text_empty_still_has_run() {
        let p = Paragraph::with_text("");
        assert_eq!(p.runs().len(), 1);
        assert!(p.is_empty());
    }

    #[test]
    fn test_heading() {
        let h1 = Paragraph::heading("Title", 1);
        assert!(h1.is_heading());
        assert_eq!(h1.heading_level(), Some(1));

        let clamped = Paragraph::heading("Deep", 9);
        assert_eq!(clamped.heading_level(), Some(6));
    }

    #[test]
    fn test_bullet() {
        let item = Paragraph::bullet("Item", 1);
        assert!(item.is_list_item());
        assert_eq!(item.style.list_info, Some(ListInfo::bullet(1)));
    }

    #[test]
    fn test_add_run_returns_handle() {
        let mut p = Paragraph::new();
        p.add_text("plain").style.bold = true;
        assert!(p.runs()[0].style.bold);
    }

    #[test]
    fn test_run_builders() {
        let run = TextRun::new("x").color(Rgb(1, 2, 3)).size(9.0).font("Consolas");
        assert_eq!(run.style.color, Some(Rgb(1, 2, 3)));
        assert_eq!(run.style.font_size, Some(9.0));
        assert_eq!(run.style.font_name.as_deref(), Some("Consolas"));
        assert!(!run.style.has_styling());
        assert!(TextRun::bold("b").style.has_styling());
    }
}
