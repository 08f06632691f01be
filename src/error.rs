//! Error types for familyos-docs.

use std::io;
use thiserror::Error;

/// Result type alias for document generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or saving documents.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when writing output files (e.g. missing output directory).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during rendering (DOCX packing, Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// No generator is registered under the requested name.
    #[error("Unknown document: {0}")]
    UnknownDocument(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(err.to_string())
    }
}
