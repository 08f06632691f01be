//! JSON rendering for generated documents.

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose;
    use crate::model::Metadata;

    #[test]
    fn test_to_json_pretty() {
        let mut doc = Document::with_metadata(Metadata::new("a.docx").title("Test"));
        doc.add_paragraph("Hello");

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("Test"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let mut doc = Document::new();
        doc.add_page_break();

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"type\":\"page_break\""));
    }

    #[test]
    fn test_colors_serialize_as_hex() {
        let mut doc = Document::new();
        compose::add_note(&mut doc, "check");

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(json.contains("\"C47800\""));

        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
