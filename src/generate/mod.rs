//! Document generation: the generator trait, a registry keyed by document
//! name, and the drivers that build, render and save.
//!
//! # Example
//!
//! ```no_run
//! use familyos_docs::generate::{GenerateOptions, GeneratorRegistry, OutputFormat};
//!
//! fn main() -> familyos_docs::Result<()> {
//!     let registry = GeneratorRegistry::with_defaults();
//!     let options = GenerateOptions::new("docs")
//!         .with_create_dir(true)
//!         .with_format(OutputFormat::Markdown);
//!
//!     let generator = registry.get("manual")?;
//!     let path = familyos_docs::generate::generate(generator.as_ref(), &options)?;
//!     println!("{}", path.display());
//!     Ok(())
//! }
//! ```

mod builtin;

pub use builtin::BuiltinGenerator;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::render::{self, JsonFormat, RenderOptions};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Options for document generation.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory the files are written to
    pub output_dir: PathBuf,

    /// Create the output directory if it is missing
    pub create_dir: bool,

    /// Preview formats written next to the DOCX
    pub formats: Vec<OutputFormat>,

    /// Options for preview rendering
    pub render: RenderOptions,
}

impl GenerateOptions {
    /// Create options writing into `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Create the output directory before writing.
    pub fn with_create_dir(mut self, create: bool) -> Self {
        self.create_dir = create;
        self
    }

    /// Also write a preview in `format`.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        if !self.formats.contains(&format) {
            self.formats.push(format);
        }
        self
    }

    /// Path of the DOCX for `file_name`.
    ///
    /// This is `output_dir.join(file_name)` exactly: a relative
    /// `output_dir` yields a relative path and nothing is canonicalized.
    pub fn docx_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }

    /// Path of the preview in `format` for `file_name`.
    pub fn preview_path(&self, file_name: &str, format: OutputFormat) -> PathBuf {
        self.docx_path(file_name).with_extension(format.extension())
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            create_dir: false,
            formats: Vec::new(),
            render: RenderOptions::default(),
        }
    }
}

/// Preview format rendered from a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown format
    #[default]
    Markdown,

    /// Plain text
    Text,

    /// JSON structure
    Json,
}

impl OutputFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }

    /// Render `doc` in this format.
    pub fn render(self, doc: &Document, options: &RenderOptions) -> Result<String> {
        match self {
            OutputFormat::Markdown => render::to_markdown(doc, options),
            OutputFormat::Text => render::to_text(doc, options),
            OutputFormat::Json => render::to_json(doc, JsonFormat::Pretty),
        }
    }
}

/// Trait for document generators.
///
/// A generator owns fixed content and knows the file name it is saved
/// under. Building twice yields equal documents.
pub trait DocumentGenerator: Send + Sync {
    /// Registry name (e.g. `"manual"`).
    fn name(&self) -> &str;

    /// Output file name including the `.docx` extension.
    fn file_name(&self) -> &str;

    /// Human-readable title.
    fn title(&self) -> &str;

    /// Assemble the document in memory.
    fn build(&self) -> Document;
}

/// Registry of document generators, kept in registration order.
pub struct GeneratorRegistry {
    generators: Vec<Arc<dyn DocumentGenerator>>,
    by_name: HashMap<String, usize>,
}

impl GeneratorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry holding the bundled documents.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for generator in BuiltinGenerator::all() {
            registry.register(Arc::new(generator));
        }
        registry
    }

    /// Register a generator. A generator with the same name is replaced in place.
    pub fn register(&mut self, generator: Arc<dyn DocumentGenerator>) {
        let key = generator.name().to_lowercase();
        match self.by_name.get(&key) {
            Some(&idx) => self.generators[idx] = generator,
            None => {
                self.by_name.insert(key, self.generators.len());
                self.generators.push(generator);
            }
        }
    }

    /// Get a generator by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentGenerator>> {
        self.by_name
            .get(&name.to_lowercase())
            .map(|&idx| self.generators[idx].clone())
    }

    /// Get a generator by name, failing with [`Error::UnknownDocument`].
    pub fn get(&self, name: &str) -> Result<Arc<dyn DocumentGenerator>> {
        self.get_by_name(name)
            .ok_or_else(|| Error::UnknownDocument(name.to_string()))
    }

    /// Registered names in order.
    pub fn names(&self) -> Vec<&str> {
        self.generators.iter().map(|g| g.name()).collect()
    }

    /// Iterate over generators in order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn DocumentGenerator>> {
        self.generators.iter()
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Build a document, write its DOCX and any requested previews.
///
/// Returns the DOCX path as [`GenerateOptions::docx_path`] gives it, so it is
/// relative when `output_dir` is. Existing files are overwritten. When the
/// directory is missing and `create_dir` is off, or `output_dir` names
/// something other than a directory, the call fails with [`Error::Io`]
/// before anything is written.
pub fn generate(generator: &dyn DocumentGenerator, options: &GenerateOptions) -> Result<PathBuf> {
    prepare_dir(&options.output_dir, options.create_dir)?;

    let doc = generator.build();
    log::debug!(
        "{}: {} blocks, {} tables",
        generator.name(),
        doc.blocks().len(),
        doc.tables().count()
    );

    let path = options.docx_path(generator.file_name());
    render::write_docx(&doc, &path)?;
    log::info!("Saved: {}", path.display());

    for &format in &options.formats {
        let preview = options.preview_path(generator.file_name(), format);
        fs::write(&preview, format.render(&doc, &options.render)?)?;
        log::info!("Saved: {}", preview.display());
    }

    Ok(path)
}

/// Generate every registered document in order.
pub fn generate_registry(
    registry: &GeneratorRegistry,
    options: &GenerateOptions,
) -> Result<Vec<PathBuf>> {
    registry
        .iter()
        .map(|generator| generate(generator.as_ref(), options))
        .collect()
}

fn prepare_dir(dir: &Path, create: bool) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::Other,
            format!("output path is not a directory: {}", dir.display()),
        )));
    }
    if create {
        fs::create_dir_all(dir)?;
    } else if !dir.is_dir() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("output directory does not exist: {}", dir.display()),
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_options_builder() {
        let options = GenerateOptions::new("out")
            .with_create_dir(true)
            .with_format(OutputFormat::Json)
            .with_format(OutputFormat::Json)
            .with_format(OutputFormat::Text);

        assert_eq!(options.output_dir, PathBuf::from("out"));
        assert!(options.create_dir);
        assert_eq!(options.formats, vec![OutputFormat::Json, OutputFormat::Text]);
    }

    #[test]
    fn test_preview_path_replaces_extension() {
        let options = GenerateOptions::new("out");
        assert_eq!(
            options.preview_path("Report_v2.docx", OutputFormat::Markdown),
            PathBuf::from("out/Report_v2.md")
        );
        assert_eq!(options.docx_path("a.docx"), PathBuf::from("out/a.docx"));
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = GeneratorRegistry::with_defaults();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.names(), ["manual", "library-eval", "blockers"]);
        assert!(registry.get_by_name("MANUAL").is_some());
    }

    #[test]
    fn test_registry_unknown_name() {
        let registry = GeneratorRegistry::with_defaults();
        let err = registry.get("nope").err().unwrap();
        assert!(matches!(err, Error::UnknownDocument(ref n) if n == "nope"));
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = GeneratorRegistry::new();
        assert!(registry.is_empty());
        registry.register(Arc::new(BuiltinGenerator::manual()));
        registry.register(Arc::new(BuiltinGenerator::manual()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_missing_dir_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let options = GenerateOptions::new(&missing);

        let err = generate(&BuiltinGenerator::blockers(), &options).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!missing.exists());
    }

    #[test]
    fn test_create_dir_and_previews() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested").join("docs");
        let options = GenerateOptions::new(&out)
            .with_create_dir(true)
            .with_format(OutputFormat::Markdown);

        let path = generate(&BuiltinGenerator::manual(), &options).unwrap();
        assert_eq!(path, out.join(crate::documents::manual::FILE_NAME));
        assert!(path.is_file());
        assert!(out.join("Family_OS_POC_Instruction_Manual.md").is_file());
    }

    #[test]
    fn test_docx_path_keeps_relative_dir() {
        let options = GenerateOptions::default();
        let path = options.docx_path("a.docx");
        assert!(path.is_relative());
        assert_eq!(path, Path::new(".").join("a.docx"));
    }

    #[test]
    fn test_output_dir_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        fs::write(&file, b"x").unwrap();

        for create in [false, true] {
            let options = GenerateOptions::new(&file).with_create_dir(create);
            let err = generate(&BuiltinGenerator::blockers(), &options).unwrap_err();
            match err {
                Error::Io(e) => {
                    assert_ne!(e.kind(), io::ErrorKind::NotFound);
                    assert!(e.to_string().contains("not a directory"));
                }
                other => panic!("unexpected error: {other}"),
            }
        }
        assert_eq!(fs::read(&file).unwrap(), b"x");
    }
}
