//! Integration tests for the bundled document builders.

use familyos_docs::compose::{self, HEADER_FILL, NEGATIVE, POSITIVE};
use familyos_docs::render::{self, DocumentStats, JsonFormat, RenderOptions};
use familyos_docs::{BuiltinGenerator, Document, DocumentGenerator, Rgb, TextRun};

fn all_documents() -> Vec<Document> {
    BuiltinGenerator::all().iter().map(|g| g.build()).collect()
}

#[test]
fn test_every_table_header_is_styled() {
    for doc in all_documents() {
        assert!(doc.tables().count() > 0, "{}", doc.metadata.file_name);
        for table in doc.tables() {
            assert_eq!(table.header_rows, 1);
            for cell in &table.rows[0].cells {
                assert_eq!(cell.shading.as_deref(), Some(HEADER_FILL));
                let runs: Vec<_> = cell.content.iter().flat_map(|p| p.runs()).collect();
                assert!(!runs.is_empty());
                for run in runs {
                    assert!(run.style.bold);
                    assert_eq!(run.style.color, Some(Rgb::WHITE));
                    assert_eq!(run.style.font_size, Some(9.0));
                }
            }
            for row in table.body() {
                for cell in &row.cells {
                    assert!(cell.shading.is_none());
                    for p in &cell.content {
                        assert_eq!(p.style.space_before, Some(2.0));
                        assert_eq!(p.style.space_after, Some(2.0));
                        assert!(p.runs().iter().all(|r| r.style.color != Some(Rgb::WHITE)));
                    }
                }
            }
        }
    }
}

#[test]
fn test_every_table_is_rectangular() {
    for doc in all_documents() {
        for table in doc.tables() {
            assert!(table.is_rectangular());
            assert!(table.row_count() >= 2);
        }
    }
}

#[test]
fn test_building_twice_is_identical() {
    for generator in BuiltinGenerator::all() {
        let first = generator.build();
        let second = generator.build();
        assert_eq!(first, second);

        let options = RenderOptions::new().with_frontmatter(true);
        assert_eq!(
            render::to_markdown(&first, &options).unwrap(),
            render::to_markdown(&second, &options).unwrap()
        );
        assert_eq!(
            render::to_json(&first, JsonFormat::Compact).unwrap(),
            render::to_json(&second, JsonFormat::Compact).unwrap()
        );
    }
}

#[test]
fn test_default_font_and_title_page() {
    for doc in all_documents() {
        assert_eq!(doc.default_font.name, "Calibri");
        assert_eq!(doc.default_font.size, 11.0);

        let first_text = doc
            .paragraphs()
            .find(|p| !p.is_empty())
            .map(|p| p.plain_text());
        assert_eq!(first_text.as_deref(), Some("Family OS"));
        assert!(doc.page_break_count() >= 1);
    }
}

#[test]
fn test_manual_code_blocks_keep_newlines() {
    let doc = BuiltinGenerator::manual().build();
    let code_blocks: Vec<_> = doc.paragraphs().filter(|p| p.is_code_block()).collect();

    assert!(!code_blocks.is_empty());
    assert!(code_blocks.iter().any(|p| p.plain_text().contains('\n')));
    for p in code_blocks {
        assert_eq!(p.runs().len(), 1);
        assert_eq!(p.runs()[0].style.font_name.as_deref(), Some("Consolas"));
    }
}

#[test]
fn test_severity_colouring() {
    let mut run = TextRun::new("BLOCKED");
    compose::set_severity_color(&mut run, "BLOCKED");
    assert_eq!(run.style.color, Some(NEGATIVE));

    let mut run = TextRun::new("GO");
    compose::set_severity_color(&mut run, "GO");
    assert_eq!(run.style.color, Some(POSITIVE));

    let mut run = TextRun::new("UNKNOWN");
    compose::set_severity_color(&mut run, "UNKNOWN");
    assert_eq!(run.style.color, None);
}

#[test]
fn test_markdown_preview_has_sections() {
    let doc = BuiltinGenerator::library_eval().build();
    let markdown = render::to_markdown(&doc, &RenderOptions::default()).unwrap();

    assert!(markdown.contains("# 1. Executive Summary"));
    assert!(markdown.contains("# 6. Final Assessment"));
    assert!(markdown.contains("| --- |"));
}

#[test]
fn test_stats_match_model() {
    for doc in all_documents() {
        let stats = DocumentStats::from_document(&doc);
        assert_eq!(stats.table_count as usize, doc.tables().count());
        assert_eq!(stats.page_break_count as usize, doc.page_break_count());
        assert!(stats.heading_count > 0);
        assert!(stats.word_count > 0);
    }
}
