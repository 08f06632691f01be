//! Generators for the bundled documents.

use super::DocumentGenerator;
use crate::documents::{blockers, library_eval, manual};
use crate::model::Document;

/// A generator backed by one of the content builders in [`crate::documents`].
#[derive(Debug, Clone, Copy)]
pub struct BuiltinGenerator {
    name: &'static str,
    file_name: &'static str,
    title: &'static str,
    build: fn() -> Document,
}

impl BuiltinGenerator {
    /// POC Instruction Manual.
    pub fn manual() -> Self {
        Self {
            name: manual::NAME,
            file_name: manual::FILE_NAME,
            title: manual::TITLE,
            build: manual::build,
        }
    }

    /// React Native Library Evaluation Report v2.
    pub fn library_eval() -> Self {
        Self {
            name: library_eval::NAME,
            file_name: library_eval::FILE_NAME,
            title: library_eval::TITLE,
            build: library_eval::build,
        }
    }

    /// Technical Blockers & Mitigation Report v2.
    pub fn blockers() -> Self {
        Self {
            name: blockers::NAME,
            file_name: blockers::FILE_NAME,
            title: blockers::TITLE,
            build: blockers::build,
        }
    }

    /// All bundled generators in output order.
    pub fn all() -> [Self; 3] {
        [Self::manual(), Self::library_eval(), Self::blockers()]
    }
}

impl DocumentGenerator for BuiltinGenerator {
    fn name(&self) -> &str {
        self.name
    }

    fn file_name(&self) -> &str {
        self.file_name
    }

    fn title(&self) -> &str {
        self.title
    }

    fn build(&self) -> Document {
        (self.build)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_are_unique() {
        let all = BuiltinGenerator::all();
        let names: Vec<_> = all.iter().map(|g| g.name()).collect();
        assert_eq!(names, ["manual", "library-eval", "blockers"]);
    }

    #[test]
    fn test_build_matches_metadata() {
        for generator in BuiltinGenerator::all() {
            let doc = generator.build();
            assert_eq!(doc.metadata.file_name, generator.file_name());
            assert_eq!(doc.metadata.title.as_deref(), Some(generator.title()));
            assert!(generator.file_name().ends_with(".docx"));
        }
    }
}
