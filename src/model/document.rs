//! Document-level types.

use super::{Paragraph, Table};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A generated office document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, subject, date, output file name)
    pub metadata: Metadata,

    /// Font applied to every run that does not override it
    pub default_font: DefaultFont,

    /// Body content in reading order
    blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document with the default font.
    pub fn new() -> Self {
        Self {
            metadata: Metadata::default(),
            default_font: DefaultFont::default(),
            blocks: Vec::new(),
        }
    }

    /// Create a new empty document with metadata.
    pub fn with_metadata(metadata: Metadata) -> Self {
        Self {
            metadata,
            ..Self::new()
        }
    }

    /// Append a heading and return it.
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) -> &mut Paragraph {
        self.push_paragraph(Paragraph::heading(text, level))
    }

    /// Append a plain paragraph holding one run and return it.
    pub fn add_paragraph(&mut self, text: impl Into<String>) -> &mut Paragraph {
        self.push_paragraph(Paragraph::with_text(text))
    }

    /// Append a paragraph with no runs (used as a vertical spacer).
    pub fn add_empty_paragraph(&mut self) -> &mut Paragraph {
        self.push_paragraph(Paragraph::new())
    }

    /// Append a bulleted list item and return it.
    pub fn add_bullet(&mut self, text: impl Into<String>, level: u8) -> &mut Paragraph {
        self.push_paragraph(Paragraph::bullet(text, level))
    }

    /// Append an already-built paragraph and return it.
    pub fn push_paragraph(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        self.blocks.push(Block::Paragraph(paragraph));
        match self.blocks.last_mut() {
            Some(Block::Paragraph(p)) => p,
            _ => unreachable!("last block was just pushed as a paragraph"),
        }
    }

    /// Append a table and return it.
    pub fn add_table(&mut self, table: Table) -> &mut Table {
        self.blocks.push(Block::Table(table));
        match self.blocks.last_mut() {
            Some(Block::Table(t)) => t,
            _ => unreachable!("last block was just pushed as a table"),
        }
    }

    /// Append a page break.
    pub fn add_page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    /// All blocks in order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterate over top-level paragraphs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    /// Iterate over tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Number of page breaks.
    pub fn page_break_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::PageBreak))
            .count()
    }

    /// Check if the document has any content.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Paragraph(p) => Some(p.plain_text()),
                Block::Table(t) => Some(t.plain_text()),
                Block::PageBreak => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A top-level body element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Paragraph (including headings, list items and code blocks)
    Paragraph(Paragraph),
    /// Table
    Table(Table),
    /// Hard page break
    PageBreak,
}

/// Document-wide default run font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultFont {
    /// Font family
    pub name: String,

    /// Size in points
    pub size: f32,
}

impl Default for DefaultFont {
    fn default() -> Self {
        Self {
            name: "Calibri".to_string(),
            size: 11.0,
        }
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Date printed on the title page
    pub date: Option<NaiveDate>,

    /// File name the document is saved under
    pub file_name: String,
}

impl Metadata {
    /// Create metadata for a document saved under `file_name`.
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subject.
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the date.
    pub fn date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = date;
        self
    }

    /// Convert metadata to YAML frontmatter format.
    pub fn to_yaml_frontmatter(&self) -> String {
        let mut lines = vec!["---".to_string()];

        if let Some(ref title) = self.title {
            lines.push(format!("title: \"{}\"", escape_yaml(title)));
        }
        if let Some(ref subject) = self.subject {
            lines.push(format!("subject: \"{}\"", escape_yaml(subject)));
        }
        if let Some(date) = self.date {
            lines.push(format!("date: {}", date.format("%Y-%m-%d")));
        }
        lines.push(format!("file: \"{}\"", escape_yaml(&self.file_name)));

        lines.push("---".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Escape special characters for YAML strings.
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.default_font.name, "Calibri");
        assert_eq!(doc.default_font.size, 11.0);
    }

    #[test]
    fn test_append_returns_handle() {
        let mut doc = Document::new();
        doc.add_paragraph("body").style.space_after = Some(6.0);
        doc.add_heading("Title", 1);
        doc.add_page_break();

        assert_eq!(doc.blocks().len(), 3);
        assert_eq!(doc.paragraphs().count(), 2);
        assert_eq!(doc.page_break_count(), 1);
        let first = doc.paragraphs().next().unwrap();
        assert_eq!(first.style.space_after, Some(6.0));
    }

    #[test]
    fn test_empty_string_still_appends() {
        let mut doc = Document::new();
        doc.add_paragraph("");
        doc.add_bullet("", 0);
        assert_eq!(doc.paragraphs().count(), 2);
        assert!(doc.paragraphs().all(|p| p.runs().len() == 1));
    }

    #[test]
    fn test_plain_text() {
        let mut doc = Document::new();
        doc.add_heading("A", 1);
        doc.add_page_break();
        doc.add_table(Table::from_rows(["x", "y"], &[["1", "2"]]));
        assert_eq!(doc.plain_text(), "A\nx\ty\n1\t2");
    }

    #[test]
    fn test_metadata_frontmatter() {
        let meta = Metadata::new("Report.docx")
            .title("Test \"Document\"")
            .date(NaiveDate::from_ymd_opt(2026, 2, 16));

        let yaml = meta.to_yaml_frontmatter();
        assert!(yaml.starts_with("---\n"));
        assert!(yaml.contains("title: \"Test \\\"Document\\\"\""));
        assert!(yaml.contains("date: 2026-02-16"));
        assert!(yaml.contains("file: \"Report.docx\""));
    }
}
