//! Document model types for generated office documents.
//!
//! This module defines the in-memory tree that content builders append to
//! and renderers walk. A document is a flat sequence of blocks; nothing in
//! the model is ever removed or reordered once appended.

mod color;
mod document;
mod paragraph;
mod table;

pub use color::Rgb;
pub use document::{Block, DefaultFont, Document, Metadata};
pub use paragraph::{Alignment, ListInfo, Paragraph, ParagraphStyle, TextRun, TextStyle};
pub use table::{Table, TableCell, TableRow};
