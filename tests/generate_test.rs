//! Integration tests for document generation and saving.

use std::fs::File;
use std::io::Read;
use std::sync::Arc;

use familyos_docs::generate::{self, DocumentGenerator, GeneratorRegistry, OutputFormat};
use familyos_docs::{
    generate_all, generate_blockers_v2, generate_library_eval_v2, generate_manual, Document,
    Error, GenerateOptions,
};
use tempfile::TempDir;

/// Generator with caller-supplied content.
struct MockGenerator {
    name: &'static str,
}

impl DocumentGenerator for MockGenerator {
    fn name(&self) -> &str {
        self.name
    }

    fn file_name(&self) -> &str {
        "mock.docx"
    }

    fn title(&self) -> &str {
        "Mock"
    }

    fn build(&self) -> Document {
        let mut doc = Document::new();
        doc.add_heading("Mock", 1);
        doc.add_paragraph("");
        doc
    }
}

fn read_entry(path: &std::path::Path, name: &str) -> String {
    let file = File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut xml = String::new();
    entry.read_to_string(&mut xml).unwrap();
    xml
}

#[test]
fn test_generate_returns_joined_path() {
    let dir = TempDir::new().unwrap();
    let options = GenerateOptions::new(dir.path());

    let manual = generate_manual(&options).unwrap();
    let eval = generate_library_eval_v2(&options).unwrap();
    let blockers = generate_blockers_v2(&options).unwrap();

    assert_eq!(
        manual,
        dir.path().join("Family_OS_POC_Instruction_Manual.docx")
    );
    assert_eq!(
        eval,
        dir.path()
            .join("Family_OS_React_Native_Library_Evaluation_Report_v2.docx")
    );
    assert_eq!(
        blockers,
        dir.path()
            .join("Family_OS_Technical_Blockers_and_Mitigation_Report_v2.docx")
    );
    for path in [manual, eval, blockers] {
        assert!(path.is_file());
    }
}

#[test]
fn test_saved_file_is_docx_package() {
    let dir = TempDir::new().unwrap();
    let path = generate_blockers_v2(&GenerateOptions::new(dir.path())).unwrap();

    let xml = read_entry(&path, "word/document.xml");
    assert!(xml.contains("Technical Blockers &amp; Mitigation Report"));
    assert!(xml.contains("2C3E50"));
    assert!(xml.contains("C00000"));

    let styles = read_entry(&path, "word/styles.xml");
    assert!(styles.contains("Heading1"));
}

#[test]
fn test_code_block_newlines_become_breaks() {
    let dir = TempDir::new().unwrap();
    let path = generate_manual(&GenerateOptions::new(dir.path())).unwrap();

    let xml = read_entry(&path, "word/document.xml");
    assert!(xml.contains("Consolas"));
    assert!(xml.contains("<w:br"));
}

#[test]
fn test_generating_twice_gives_identical_parts() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    for generate_one in [generate_manual, generate_library_eval_v2, generate_blockers_v2] {
        let a = generate_one(&GenerateOptions::new(first.path())).unwrap();
        let b = generate_one(&GenerateOptions::new(second.path())).unwrap();
        assert_eq!(a.file_name(), b.file_name());

        for part in ["word/document.xml", "word/styles.xml", "word/numbering.xml"] {
            assert_eq!(read_entry(&a, part), read_entry(&b, part), "{part}");
        }
    }
}

#[test]
fn test_generate_all_overwrites() {
    let dir = TempDir::new().unwrap();
    let options = GenerateOptions::new(dir.path());

    let first = generate_all(&options).unwrap();
    let second = generate_all(&options).unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);
}

#[test]
fn test_missing_output_dir_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let options = GenerateOptions::new(&missing);

    let err = generate_manual(&options).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!missing.exists());
}

#[test]
fn test_create_dir_opt_in() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("a").join("b");
    let options = GenerateOptions::new(&out).with_create_dir(true);

    let path = generate_library_eval_v2(&options).unwrap();
    assert!(path.starts_with(&out));
    assert!(path.is_file());
}

#[test]
fn test_previews_written_next_to_docx() {
    let dir = TempDir::new().unwrap();
    let options = GenerateOptions::new(dir.path())
        .with_format(OutputFormat::Markdown)
        .with_format(OutputFormat::Text)
        .with_format(OutputFormat::Json);

    generate_manual(&options).unwrap();

    let stem = dir.path().join("Family_OS_POC_Instruction_Manual");
    let markdown = std::fs::read_to_string(stem.with_extension("md")).unwrap();
    assert!(markdown.contains("# 8. Troubleshooting"));
    assert!(stem.with_extension("txt").is_file());

    let json = std::fs::read_to_string(stem.with_extension("json")).unwrap();
    let doc: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(doc, familyos_docs::build_document("manual").unwrap());
}

#[test]
fn test_registry_with_custom_generator() {
    let mut registry = GeneratorRegistry::new();
    registry.register(Arc::new(MockGenerator { name: "mock" }));

    let dir = TempDir::new().unwrap();
    let options = GenerateOptions::new(dir.path());
    let paths = generate::generate_registry(&registry, &options).unwrap();

    assert_eq!(paths, vec![dir.path().join("mock.docx")]);
    assert!(registry.get("Mock").is_ok());
    assert!(matches!(
        registry.get("manual").err(),
        Some(Error::UnknownDocument(_))
    ));
}
