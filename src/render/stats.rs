//! Block statistics for a document.

use crate::model::{Block, Document};

/// Counts of what a document contains.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Number of plain paragraphs with visible text
    pub paragraph_count: u32,

    /// Number of headings
    pub heading_count: u32,

    /// Number of bulleted list items
    pub list_item_count: u32,

    /// Number of code blocks
    pub code_block_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of table rows, header rows included
    pub table_row_count: u32,

    /// Number of page breaks
    pub page_break_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count blocks and text of a whole document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        for block in doc.blocks() {
            match block {
                Block::Paragraph(p) if p.is_empty() => {}
                Block::Paragraph(p) => {
                    if p.is_heading() {
                        stats.add_heading();
                    } else if p.is_list_item() {
                        stats.add_list_item();
                    } else if p.is_code_block() {
                        stats.add_code_block();
                    } else {
                        stats.add_paragraph();
                    }
                    stats.count_text(&p.plain_text());
                }
                Block::Table(t) => {
                    stats.add_table(t.row_count());
                    stats.count_text(&t.plain_text());
                }
                Block::PageBreak => stats.add_page_break(),
            }
        }
        stats
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment code block count.
    pub fn add_code_block(&mut self) {
        self.code_block_count += 1;
    }

    /// Increment table count and add its rows.
    pub fn add_table(&mut self, rows: usize) {
        self.table_count += 1;
        self.table_row_count += rows as u32;
    }

    /// Increment page break count.
    pub fn add_page_break(&mut self) {
        self.page_break_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Table;

    #[test]
    fn test_stats_count_text() {
        let mut stats = DocumentStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_stats_from_document() {
        let mut doc = Document::new();
        doc.add_paragraph("");
        doc.add_heading("1. Overview", 1);
        doc.add_paragraph("Body text");
        doc.add_bullet("item", 0);
        doc.add_table(Table::from_rows(["A", "B"], &[["1", "2"], ["3", "4"]]));
        doc.add_page_break();

        let stats = DocumentStats::from_document(&doc);
        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.list_item_count, 1);
        assert_eq!(stats.table_count, 1);
        assert_eq!(stats.table_row_count, 3);
        assert_eq!(stats.page_break_count, 1);
        assert_eq!(stats.code_block_count, 0);
    }
}
