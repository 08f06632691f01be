//! DOCX serialization.
//!
//! Walks the document model and emits a WordprocessingML package through
//! `docx-rs`. All styling lives on the model; this module only maps it to
//! the corresponding DOCX properties.

use std::io::Cursor;
use std::path::Path;

use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText,
    LineSpacing, NumberFormat, Numbering, NumberingId, Paragraph as DocxParagraph, Run, RunFonts,
    Shading, ShdType, SpecialIndentType, Start, Style, StyleType, Table as DocxTable,
    TableAlignmentType, TableCell as DocxTableCell, TableRow as DocxTableRow,
};

use crate::error::{Error, Result};
use crate::model::{Alignment, Block, Document, Paragraph, Table, TableCell, TextRun};

/// Numbering instance used by every bulleted list item.
const BULLET_NUMBERING_ID: usize = 1;

/// Bullet glyph per nesting level.
const BULLET_GLYPHS: [&str; 3] = ["•", "○", "▪"];

/// Twips per point.
const TWIPS_PER_POINT: f32 = 20.0;

/// Twips per centimetre.
const TWIPS_PER_CM: f32 = 567.0;

/// Serialize a document into DOCX bytes.
pub fn to_docx(doc: &Document) -> Result<Vec<u8>> {
    DocxWriter::new().write(doc)
}

/// Serialize a document and write it to `path`, overwriting any existing file.
///
/// The parent directory must already exist; a missing directory surfaces as
/// [`Error::Io`] and nothing is written.
pub fn write_docx(doc: &Document, path: impl AsRef<Path>) -> Result<()> {
    let bytes = to_docx(doc)?;
    std::fs::write(path.as_ref(), bytes)?;
    Ok(())
}

/// Builds a `docx_rs::Docx` from a [`Document`].
///
/// Paragraph ids are numbered per writer, so the same document always
/// yields the same `word/document.xml`.
#[derive(Debug, Default)]
pub struct DocxWriter {
    uses_bullets: bool,
    next_para_id: u32,
}

impl DocxWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize a document into DOCX bytes.
    pub fn write(mut self, doc: &Document) -> Result<Vec<u8>> {
        let docx = self.build(doc);

        let mut buffer = Vec::new();
        docx.build()
            .pack(&mut Cursor::new(&mut buffer))
            .map_err(|e| Error::Render(format!("Failed to pack DOCX: {e}")))?;

        log::debug!(
            "packed {} ({} bytes)",
            doc.metadata.file_name,
            buffer.len()
        );
        Ok(buffer)
    }

    fn build(&mut self, doc: &Document) -> Docx {
        let font = &doc.default_font;
        let mut docx = Docx::new()
            .default_fonts(fonts(&font.name))
            .default_size(half_points(font.size));
        docx = add_heading_styles(docx);

        for block in doc.blocks() {
            docx = match block {
                Block::Paragraph(p) => docx.add_paragraph(self.paragraph(p)),
                Block::Table(t) => docx.add_table(self.table(t)),
                Block::PageBreak => docx.add_paragraph(
                    self.new_paragraph()
                        .add_run(Run::new().add_break(BreakType::Page)),
                ),
            };
        }

        if self.uses_bullets {
            docx = add_bullet_numbering(docx);
        }
        docx
    }

    // docx-rs draws default ids from a thread-local counter that is never reset
    fn new_paragraph(&mut self) -> DocxParagraph {
        self.next_para_id += 1;
        DocxParagraph::new().id(format!("{:08x}", self.next_para_id))
    }

    fn paragraph(&mut self, para: &Paragraph) -> DocxParagraph {
        let mut out = self.new_paragraph();
        let style = &para.style;

        if let Some(level) = style.heading_level {
            out = out.style(&format!("Heading{level}"));
        }
        if let Some(ref list) = style.list_info {
            self.uses_bullets = true;
            out = out.numbering(
                NumberingId::new(BULLET_NUMBERING_ID),
                IndentLevel::new(list.level as usize),
            );
        }
        if style.alignment != Alignment::Left {
            out = out.align(alignment_type(style.alignment));
        }
        if style.space_before.is_some() || style.space_after.is_some() {
            let mut spacing = LineSpacing::new();
            if let Some(points) = style.space_before {
                spacing = spacing.before(twips(points) as u32);
            }
            if let Some(points) = style.space_after {
                spacing = spacing.after(twips(points) as u32);
            }
            out = out.line_spacing(spacing);
        }
        if let Some(cm) = style.left_indent_cm {
            out = out.indent(Some((cm * TWIPS_PER_CM).round() as i32), None, None, None);
        }

        for run in para.runs() {
            out = out.add_run(text_run(run));
        }
        out
    }

    fn table(&mut self, table: &Table) -> DocxTable {
        let rows = table
            .rows
            .iter()
            .map(|row| {
                let cells = row.cells.iter().map(|cell| self.cell(cell)).collect();
                DocxTableRow::new(cells)
            })
            .collect();

        let mut out = DocxTable::new(rows);
        if table.alignment == Alignment::Center {
            out = out.align(TableAlignmentType::Center);
        }
        out
    }

    fn cell(&mut self, cell: &TableCell) -> DocxTableCell {
        let mut out = DocxTableCell::new();
        for paragraph in &cell.content {
            out = out.add_paragraph(self.paragraph(paragraph));
        }
        if cell.content.is_empty() {
            out = out.add_paragraph(self.new_paragraph());
        }
        if let Some(ref fill) = cell.shading {
            out = out.shading(Shading::new().shd_type(ShdType::Clear).fill(fill.as_str()));
        }
        out
    }
}

/// Map one model run, turning embedded newlines into line breaks.
fn text_run(run: &TextRun) -> Run {
    let mut out = Run::new();
    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            out = out.add_break(BreakType::TextWrapping);
        }
        if !line.is_empty() {
            out = out.add_text(line);
        }
    }

    let style = &run.style;
    if style.bold {
        out = out.bold();
    }
    if style.italic {
        out = out.italic();
    }
    if let Some(points) = style.font_size {
        out = out.size(half_points(points));
    }
    if let Some(color) = style.color {
        out = out.color(color.to_hex());
    }
    if let Some(ref name) = style.font_name {
        out = out.fonts(fonts(name));
    }
    out
}

fn add_heading_styles(docx: Docx) -> Docx {
    let heading = |level: u8, points: f32, color: &str| {
        Style::new(&format!("Heading{level}"), StyleType::Paragraph)
            .name(&format!("Heading {level}"))
            .size(half_points(points))
            .color(color)
            .bold()
    };

    docx.add_style(heading(1, 14.0, "365F91"))
        .add_style(heading(2, 13.0, "4F81BD"))
        .add_style(heading(3, 11.0, "4F81BD"))
}

fn add_bullet_numbering(docx: Docx) -> Docx {
    let mut bullets = AbstractNumbering::new(BULLET_NUMBERING_ID);
    for (i, glyph) in BULLET_GLYPHS.iter().cycle().take(9).enumerate() {
        let level = Level::new(
            i,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new(*glyph),
            LevelJc::new("left"),
        )
        .indent(
            Some(720 * (i as i32 + 1)),
            Some(SpecialIndentType::Hanging(360)),
            None,
            None,
        );
        bullets = bullets.add_level(level);
    }

    docx.add_abstract_numbering(bullets)
        .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID))
}

fn fonts(name: &str) -> RunFonts {
    RunFonts::new()
        .ascii(name)
        .hi_ansi(name)
        .east_asia(name)
        .cs(name)
}

fn alignment_type(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
        Alignment::Justify => AlignmentType::Both,
    }
}

/// Points to the half-point unit DOCX uses for run sizes.
fn half_points(points: f32) -> usize {
    (points * 2.0).round() as usize
}

fn twips(points: f32) -> f32 {
    (points * TWIPS_PER_POINT).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose;
    use crate::model::Metadata;

    #[test]
    fn test_unit_conversions() {
        assert_eq!(half_points(11.0), 22);
        assert_eq!(half_points(9.0), 18);
        assert_eq!(half_points(10.5), 21);
        assert_eq!(twips(2.0), 40.0);
        assert_eq!(twips(4.0), 80.0);
    }

    #[test]
    fn test_to_docx_is_zip_container() {
        let mut doc = Document::with_metadata(Metadata::new("t.docx"));
        doc.add_heading("Heading", 1);
        doc.add_bullet("item", 1);
        compose::add_code_block(&mut doc, "a\nb");
        compose::add_styled_table(&mut doc, ["A", "B"], &[["1", "2"]]);
        doc.add_page_break();

        let bytes = to_docx(&doc).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_paragraph_ids_restart_per_writer() {
        let mut doc = Document::new();
        doc.add_heading("Heading", 1);
        compose::add_styled_table(&mut doc, ["A", "B"], &[["1", "2"]]);
        doc.add_page_break();

        let ids = |docx: Docx| {
            docx.document
                .children
                .iter()
                .filter_map(|child| match child {
                    docx_rs::DocumentChild::Paragraph(p) => Some(p.id.clone()),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };
        let first = ids(DocxWriter::new().build(&doc));
        let second = ids(DocxWriter::new().build(&doc));

        assert_eq!(first, ["00000001", "00000006"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_document_packs() {
        let bytes = to_docx(&Document::new()).unwrap();
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_write_docx_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.docx");

        let err = write_docx(&Document::new(), &path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!path.exists());
    }
}
