//! Formatting helpers shared by every content builder.
//!
//! These helpers only append to or restyle what the builders already
//! created. Colour, size and indent arguments are literal values and are
//! passed through unchecked.

use crate::model::{Alignment, Document, Paragraph, Rgb, Table, TableCell, TextRun};

/// Header row fill and heading-accent colour.
pub const DARK_SLATE: Rgb = Rgb(44, 62, 80);
/// Palette entry for bad outcomes (HIGH, BLOCKED, ...).
pub const NEGATIVE: Rgb = Rgb(192, 0, 0);
/// Palette entry for caution (MEDIUM, notes).
pub const CAUTION: Rgb = Rgb(196, 120, 0);
/// Palette entry for good outcomes (LOW, GO, PASS, ...).
pub const POSITIVE: Rgb = Rgb(0, 128, 0);
/// Grey used for secondary title-page lines.
pub const MUTED: Rgb = Rgb(100, 100, 100);
/// Lighter grey used for footers.
pub const FAINT: Rgb = Rgb(150, 150, 150);
/// Code block text colour.
pub const CODE_TEXT: Rgb = Rgb(30, 30, 30);

/// Fill applied to header-row cells by [`style_table`].
pub const HEADER_FILL: &str = "2C3E50";

const CODE_FONT: &str = "Consolas";

/// Set a cell's background fill.
pub fn set_cell_shading(cell: &mut TableCell, color_hex: &str) {
    cell.shading = Some(color_hex.to_string());
}

/// Apply the house table style.
///
/// Every cell paragraph gets 2pt spacing before and after and 9pt runs.
/// Row 0 is shaded [`HEADER_FILL`] with bold white text. The table is
/// centered.
pub fn style_table(table: &mut Table) {
    table.alignment = Alignment::Center;
    for (row_idx, row) in table.rows.iter_mut().enumerate() {
        for cell in row.cells.iter_mut() {
            for paragraph in cell.content.iter_mut() {
                paragraph.style.space_before = Some(2.0);
                paragraph.style.space_after = Some(2.0);
                for run in paragraph.runs_mut() {
                    run.style.font_size = Some(9.0);
                }
            }
            if row_idx == 0 {
                set_cell_shading(cell, HEADER_FILL);
                for paragraph in cell.content.iter_mut() {
                    for run in paragraph.runs_mut() {
                        run.style.color = Some(Rgb::WHITE);
                        run.style.bold = true;
                    }
                }
            }
        }
    }
}

/// Append a table built from literal rows and apply [`style_table`].
pub fn add_styled_table<'a, const N: usize>(
    doc: &'a mut Document,
    header: [&str; N],
    rows: &[[&str; N]],
) -> &'a mut Table {
    let table = doc.add_table(Table::from_rows(header, rows));
    style_table(table);
    table
}

/// Append a monospace code block.
///
/// The code stays in a single run; newlines are preserved and become line
/// breaks when rendered.
pub fn add_code_block<'a>(doc: &'a mut Document, code: &str) -> &'a mut Paragraph {
    let p = doc.add_empty_paragraph();
    p.style.preformatted = true;
    p.style.space_before = Some(4.0);
    p.style.space_after = Some(4.0);
    p.style.left_indent_cm = Some(0.5);
    p.add_run(TextRun::new(code).font(CODE_FONT).size(9.0).color(CODE_TEXT));
    p
}

/// Append a "Step N: text" paragraph.
pub fn add_step<'a>(doc: &'a mut Document, step_num: u32, text: &str) -> &'a mut Paragraph {
    let p = doc.add_empty_paragraph();
    p.add_run(TextRun::bold(format!("Step {step_num}: ")).color(DARK_SLATE));
    p.add_text(text);
    p
}

/// Append a "NOTE: text" paragraph.
pub fn add_note<'a>(doc: &'a mut Document, text: &str) -> &'a mut Paragraph {
    let p = doc.add_empty_paragraph();
    p.add_run(TextRun::bold("NOTE: ").color(CAUTION));
    p.add_text(text);
    p
}

/// Append a coloured run to a paragraph.
pub fn add_colored_text<'a>(
    paragraph: &'a mut Paragraph,
    text: &str,
    color: Rgb,
    bold: bool,
    size: Option<f32>,
) -> &'a mut TextRun {
    let run = paragraph.add_text(text);
    run.style.color = Some(color);
    run.style.bold = bold;
    if let Some(points) = size {
        run.style.font_size = Some(points);
    }
    run
}

/// Append a bold label run such as `"Confidence Level: "`.
pub fn add_label<'a>(paragraph: &'a mut Paragraph, text: &str) -> &'a mut TextRun {
    paragraph.add_run(TextRun::bold(text))
}

/// Palette colour for a severity or status token.
///
/// Returns `None` for tokens outside the palette; callers leave the run
/// colour as it was.
pub fn severity_color(token: &str) -> Option<Rgb> {
    match token {
        "HIGH" | "CRITICAL" | "PARTIAL" | "BLOCKED" => Some(NEGATIVE),
        "MEDIUM" => Some(CAUTION),
        "LOW" | "GO" | "WORKING" | "PASS" => Some(POSITIVE),
        _ => None,
    }
}

/// Colour an existing run by severity token, if the token is known.
pub fn set_severity_color(run: &mut TextRun, token: &str) {
    if let Some(color) = severity_color(token) {
        run.style.color = Some(color);
    }
}

/// Append a bold 9pt run holding `severity`, coloured by [`severity_color`].
pub fn add_severity_text<'a>(paragraph: &'a mut Paragraph, severity: &str) -> &'a mut TextRun {
    let run = paragraph.add_run(TextRun::bold(severity).size(9.0));
    set_severity_color(run, severity);
    run
}

/// Append a centered single-run paragraph, as used on title pages.
pub fn add_centered<'a>(
    doc: &'a mut Document,
    text: &str,
    size: f32,
    bold: bool,
    color: Rgb,
) -> &'a mut Paragraph {
    let p = doc.add_empty_paragraph();
    p.style.alignment = Alignment::Center;
    add_colored_text(p, text, color, bold, Some(size));
    p
}

/// Append `count` spacer paragraphs.
pub fn add_spacers(doc: &mut Document, count: usize) {
    for _ in 0..count {
        doc.add_paragraph("");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_table_header_and_body() {
        let mut table = Table::from_rows(["Issue", "Fix"], &[["a", "b"], ["c", ""]]);
        style_table(&mut table);

        assert_eq!(table.alignment, Alignment::Center);
        for cell in &table.rows[0].cells {
            assert_eq!(cell.shading.as_deref(), Some(HEADER_FILL));
            for run in cell.content[0].runs() {
                assert!(run.style.bold);
                assert_eq!(run.style.color, Some(Rgb::WHITE));
                assert_eq!(run.style.font_size, Some(9.0));
            }
        }
        for row in &table.rows[1..] {
            for cell in &row.cells {
                assert!(cell.shading.is_none());
                let p = &cell.content[0];
                assert_eq!(p.style.space_before, Some(2.0));
                assert_eq!(p.style.space_after, Some(2.0));
                assert_eq!(p.runs().len(), 1);
                assert!(p.runs().iter().all(|r| r.style.color.is_none()));
            }
        }
    }

    #[test]
    fn test_empty_header_cell_still_styled() {
        let mut table = Table::from_rows(["", "B"], &[]);
        style_table(&mut table);
        let run = &table.rows[0].cells[0].content[0].runs()[0];
        assert!(run.style.bold);
        assert_eq!(run.style.color, Some(Rgb::WHITE));
    }

    #[test]
    fn test_code_block_keeps_newlines() {
        let mut doc = Document::new();
        add_code_block(&mut doc, "cd X\nnpm install\nnpx expo run:android");

        let paragraphs: Vec<_> = doc.paragraphs().collect();
        assert_eq!(paragraphs.len(), 1);
        let p = paragraphs[0];
        assert!(p.is_code_block());
        assert_eq!(p.runs().len(), 1);
        assert_eq!(p.plain_text(), "cd X\nnpm install\nnpx expo run:android");
        assert_eq!(p.style.left_indent_cm, Some(0.5));

        let run = &p.runs()[0];
        assert_eq!(run.style.font_name.as_deref(), Some("Consolas"));
        assert_eq!(run.style.font_size, Some(9.0));
        assert_eq!(run.style.color, Some(CODE_TEXT));
    }

    #[test]
    fn test_step_and_note() {
        let mut doc = Document::new();
        add_step(&mut doc, 3, "Run it");
        add_note(&mut doc, "Careful");

        let ps: Vec<_> = doc.paragraphs().collect();
        assert_eq!(ps[0].plain_text(), "Step 3: Run it");
        assert_eq!(ps[0].runs()[0].style.color, Some(DARK_SLATE));
        assert!(ps[0].runs()[0].style.bold);
        assert!(!ps[0].runs()[1].style.bold);

        assert_eq!(ps[1].plain_text(), "NOTE: Careful");
        assert_eq!(ps[1].runs()[0].style.color, Some(CAUTION));
    }

    #[test]
    fn test_severity_lookup() {
        assert_eq!(severity_color("BLOCKED"), Some(NEGATIVE));
        assert_eq!(severity_color("CRITICAL"), Some(NEGATIVE));
        assert_eq!(severity_color("MEDIUM"), Some(CAUTION));
        assert_eq!(severity_color("GO"), Some(POSITIVE));
        assert_eq!(severity_color("PASS"), Some(POSITIVE));
        assert_eq!(severity_color("UNKNOWN"), None);
        assert_eq!(severity_color("high"), None);
    }

    #[test]
    fn test_add_severity_text() {
        let mut p = Paragraph::new();
        add_severity_text(&mut p, "HIGH");
        add_severity_text(&mut p, "UNKNOWN");

        let runs = p.runs();
        assert_eq!(runs[0].style.color, Some(NEGATIVE));
        assert!(runs[0].style.bold);
        assert_eq!(runs[0].style.font_size, Some(9.0));
        assert_eq!(runs[1].style.color, None);
    }

    #[test]
    fn test_set_severity_color_leaves_unknown_unchanged() {
        let mut run = TextRun::new("x").color(MUTED);
        set_severity_color(&mut run, "???");
        assert_eq!(run.style.color, Some(MUTED));
        set_severity_color(&mut run, "LOW");
        assert_eq!(run.style.color, Some(POSITIVE));
    }

    #[test]
    fn test_colored_text_and_label() {
        let mut p = Paragraph::new();
        add_label(&mut p, "Verdict: ");
        add_colored_text(&mut p, "GO", POSITIVE, true, None);
        add_colored_text(&mut p, " (small)", MUTED, false, Some(8.0));

        assert_eq!(p.plain_text(), "Verdict: GO (small)");
        assert!(p.runs()[0].style.bold);
        assert_eq!(p.runs()[1].style.font_size, None);
        assert_eq!(p.runs()[2].style.font_size, Some(8.0));
    }

    #[test]
    fn test_empty_strings_still_append() {
        let mut doc = Document::new();
        add_code_block(&mut doc, "");
        add_step(&mut doc, 1, "");
        add_note(&mut doc, "");
        add_spacers(&mut doc, 2);
        assert_eq!(doc.paragraphs().count(), 5);
    }
}
