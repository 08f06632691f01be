//! Plain text rendering for generated documents.

use crate::error::Result;
use crate::model::{Block, Document};

use super::RenderOptions;

/// Convert a document to plain text.
///
/// Headings and paragraphs become lines separated by blank lines, list
/// items are prefixed with the configured marker, and table cells are
/// separated by tabs.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();
    let mut in_list = false;

    for block in doc.blocks() {
        let is_item = matches!(block, Block::Paragraph(p) if p.is_list_item());
        if in_list && !is_item {
            output.push('\n');
        }
        in_list = is_item;

        match block {
            Block::Paragraph(p) if p.is_empty() => {}
            Block::Paragraph(p) => {
                if let Some(ref list) = p.style.list_info {
                    output.push_str(&"  ".repeat(list.level as usize));
                    output.push(options.list_marker);
                    output.push(' ');
                    output.push_str(p.plain_text().trim_end());
                    output.push('\n');
                } else {
                    output.push_str(p.plain_text().trim_end());
                    output.push_str("\n\n");
                }
            }
            Block::Table(t) => {
                output.push_str(&t.plain_text());
                output.push_str("\n\n");
            }
            Block::PageBreak => {
                if options.page_break_rule {
                    output.push_str("\x0C\n");
                }
            }
        }
    }

    Ok(format!("{}\n", output.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Table;

    #[test]
    fn test_to_text() {
        let mut doc = Document::new();
        doc.add_paragraph("Hello, world!");
        doc.add_paragraph("");
        doc.add_paragraph("Second paragraph.");

        let result = to_text(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(result, "Hello, world!\n\nSecond paragraph.\n");
    }

    #[test]
    fn test_to_text_lists_and_tables() {
        let mut doc = Document::new();
        doc.add_bullet("top", 0);
        doc.add_bullet("nested", 1);
        doc.add_table(Table::from_rows(["A", "B"], &[["1", "2"]]));

        let options = RenderOptions::new().with_list_marker('*');
        let result = to_text(&doc, &options).unwrap();
        assert_eq!(result, "* top\n  * nested\n\nA\tB\n1\t2\n");
    }
}
