//! Rendering module for converting documents to DOCX and preview formats.

mod docx;
mod json;
mod markdown;
mod options;
mod stats;
mod text;

pub use docx::{to_docx, write_docx, DocxWriter};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::RenderOptions;
pub use stats::DocumentStats;
pub use text::to_text;
