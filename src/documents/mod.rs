//! Content builders, one per output document.
//!
//! Each builder returns a fully assembled [`Document`]; nothing here touches
//! the filesystem. Content is fixed: building twice yields equal documents.

pub mod blockers;
pub mod library_eval;
pub mod manual;

use crate::compose::{self, DARK_SLATE, FAINT, POSITIVE};
use crate::model::{Alignment, Document, Metadata, Rgb};
use chrono::NaiveDate;

/// Create an empty document with metadata and the house default font.
pub(crate) fn new_document(
    file_name: &str,
    title: &str,
    subject: &str,
    date: (i32, u32, u32),
) -> Document {
    let (y, m, d) = date;
    Document::with_metadata(
        Metadata::new(file_name)
            .title(title)
            .subject(subject)
            .date(NaiveDate::from_ymd_opt(y, m, d)),
    )
}

/// A centered line on a title page below the subtitle.
pub(crate) struct TitleLine<'a> {
    pub text: &'a str,
    pub size: f32,
    pub bold: bool,
    pub color: Rgb,
}

/// Title page: spacers, "Family OS", subtitle, extra lines each preceded by
/// a blank paragraph, then a 10pt details block and a page break.
pub(crate) fn title_page(
    doc: &mut Document,
    spacers: usize,
    subtitle: &str,
    lines: &[TitleLine<'_>],
    details: &[&str],
) {
    compose::add_spacers(doc, spacers);
    compose::add_centered(doc, "Family OS", 28.0, true, DARK_SLATE);
    compose::add_centered(doc, subtitle, 22.0, true, DARK_SLATE);

    for line in lines {
        doc.add_paragraph("");
        compose::add_centered(doc, line.text, line.size, line.bold, line.color);
    }

    doc.add_paragraph("");
    let p = doc.add_empty_paragraph();
    p.style.alignment = Alignment::Center;
    for detail in details {
        p.add_text(*detail).style.font_size = Some(10.0);
    }

    doc.add_page_break();
}

/// Closing lines: the first in faint grey, the rest also at 9pt.
pub(crate) fn footer(doc: &mut Document, lines: &[&str]) {
    for (i, line) in lines.iter().enumerate() {
        let p = doc.add_empty_paragraph();
        p.style.alignment = Alignment::Center;
        let size = if i == 0 { None } else { Some(9.0) };
        compose::add_colored_text(p, line, FAINT, false, size);
    }
}

/// Append one top-level bullet per item.
pub(crate) fn bullets(doc: &mut Document, items: &[&str]) {
    for item in items {
        doc.add_bullet(*item, 0);
    }
}

/// Append "Label: VALUE" with the value in bold green.
pub(crate) fn verdict(doc: &mut Document, label: &str, value: &str) {
    let p = doc.add_empty_paragraph();
    compose::add_label(p, label);
    compose::add_colored_text(p, value, POSITIVE, true, None);
}

/// Append a paragraph whose single run is bold and coloured.
pub(crate) fn status_line(doc: &mut Document, text: &str, color: Rgb) {
    let p = doc.add_empty_paragraph();
    compose::add_colored_text(p, text, color, true, None);
}
