//! # familyos-docs
//!
//! Generates the Family OS POC instruction manual and evaluation reports
//! as DOCX files.
//!
//! Each document is assembled into an in-memory [`Document`] by a content
//! builder in [`documents`], styled with the helpers in [`compose`], and
//! serialized by [`render`]. The same model also renders to Markdown, plain
//! text and JSON previews.
//!
//! ## Quick Start
//!
//! ```no_run
//! use familyos_docs::{generate_all, GenerateOptions};
//!
//! fn main() -> familyos_docs::Result<()> {
//!     let options = GenerateOptions::new("./out").with_create_dir(true);
//!     for path in generate_all(&options)? {
//!         println!("Saved: {}", path.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Previews
//!
//! ```
//! use familyos_docs::{documents, render};
//!
//! let doc = documents::blockers::build();
//! let markdown = render::to_markdown(&doc, &render::RenderOptions::default()).unwrap();
//! assert!(markdown.contains("# 1. Executive Summary"));
//! ```

pub mod compose;
pub mod documents;
pub mod error;
pub mod generate;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use generate::{
    BuiltinGenerator, DocumentGenerator, GenerateOptions, GeneratorRegistry, OutputFormat,
};
pub use model::{
    Alignment, Block, Document, ListInfo, Metadata, Paragraph, ParagraphStyle, Rgb, Table,
    TableCell, TableRow, TextRun, TextStyle,
};
pub use render::{DocumentStats, JsonFormat, RenderOptions};

use std::path::PathBuf;

/// Generate the POC Instruction Manual.
///
/// Returns `output_dir.join("Family_OS_POC_Instruction_Manual.docx")`.
pub fn generate_manual(options: &GenerateOptions) -> Result<PathBuf> {
    generate::generate(&BuiltinGenerator::manual(), options)
}

/// Generate the React Native Library Evaluation Report v2.
pub fn generate_library_eval_v2(options: &GenerateOptions) -> Result<PathBuf> {
    generate::generate(&BuiltinGenerator::library_eval(), options)
}

/// Generate the Technical Blockers & Mitigation Report v2.
pub fn generate_blockers_v2(options: &GenerateOptions) -> Result<PathBuf> {
    generate::generate(&BuiltinGenerator::blockers(), options)
}

/// Generate all three documents, one after another.
///
/// Stops at the first failure; documents already written stay on disk.
pub fn generate_all(options: &GenerateOptions) -> Result<Vec<PathBuf>> {
    generate::generate_registry(&GeneratorRegistry::with_defaults(), options)
}

/// Build a document by registry name without writing anything.
pub fn build_document(name: &str) -> Result<Document> {
    Ok(GeneratorRegistry::with_defaults().get(name)?.build())
}

/// Get the library version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_build_document_by_name() {
        let doc = build_document("blockers").unwrap();
        assert_eq!(
            doc.metadata.file_name,
            "Family_OS_Technical_Blockers_and_Mitigation_Report_v2.docx"
        );
        assert!(matches!(
            build_document("unknown"),
            Err(Error::UnknownDocument(_))
        ));
    }
}
