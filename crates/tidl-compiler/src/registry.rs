//! Generator registry.
//!
//! Maps generator ids (the `<lang>` of `gen-<lang>` output directories) to
//! factories. Built-in backends are registered at construction.

use std::collections::BTreeMap;

use tidl_codegen::{ClGenerator, Generator};

use crate::error::GenerateError;

/// Builds a fresh generator instance.
pub type GeneratorFactory = fn() -> Box<dyn Generator>;

/// One registered generator.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorEntry {
    pub id: &'static str,
    /// Human-readable name of the target language.
    pub description: &'static str,
    factory: GeneratorFactory,
}

impl GeneratorEntry {
    pub fn create(&self) -> Box<dyn Generator> {
        (self.factory)()
    }
}

/// Registry mapping generator id → factory.
#[derive(Debug)]
pub struct GeneratorRegistry {
    entries: BTreeMap<&'static str, GeneratorEntry>,
}

impl GeneratorRegistry {
    /// Create a registry holding every built-in generator.
    pub fn new() -> Self {
        let mut reg = Self {
            entries: BTreeMap::new(),
        };
        reg.register("cl", "Common Lisp", cl);
        reg
    }

    /// Register a generator, replacing any previous one with the same id.
    pub fn register(
        &mut self,
        id: &'static str,
        description: &'static str,
        factory: GeneratorFactory,
    ) {
        self.entries.insert(
            id,
            GeneratorEntry {
                id,
                description,
                factory,
            },
        );
    }

    /// Look up a generator by id.
    pub fn get(&self, id: &str) -> Option<&GeneratorEntry> {
        self.entries.get(id)
    }

    /// Instantiate the generator registered under `id`.
    pub fn create(&self, id: &str) -> Result<Box<dyn Generator>, GenerateError> {
        self.get(id)
            .map(GeneratorEntry::create)
            .ok_or_else(|| GenerateError::UnknownGenerator(id.to_string()))
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn describe(&self, id: &str) -> Option<&'static str> {
        self.get(id).map(|entry| entry.description)
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn cl() -> Box<dyn Generator> {
    Box::new(ClGenerator::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_cl_generator() {
        let reg = GeneratorRegistry::new();
        assert_eq!(reg.ids().collect::<Vec<_>>(), vec!["cl"]);
        assert_eq!(reg.describe("cl"), Some("Common Lisp"));

        let generator = reg.create("cl").unwrap();
        assert_eq!(generator.language(), "cl");
        assert_eq!(generator.file_extension(), "lisp");
        assert_eq!(generator.out_dir_name(), "gen-cl");
    }

    #[test]
    fn test_unknown_generator() {
        let reg = GeneratorRegistry::new();
        assert!(reg.get("cobol").is_none());
        assert!(reg.describe("cobol").is_none());
        let err = reg.create("cobol").err().unwrap();
        assert!(matches!(err, GenerateError::UnknownGenerator(ref id) if id == "cobol"));
        assert_eq!(err.to_string(), "unknown generator `cobol`");
    }

    #[test]
    fn test_register_replaces_and_sorts() {
        let mut reg = GeneratorRegistry::new();
        reg.register("alisp", "Another Lisp", cl);
        reg.register("cl", "Common Lisp (again)", cl);
        assert_eq!(reg.ids().collect::<Vec<_>>(), vec!["alisp", "cl"]);
        assert_eq!(reg.describe("cl"), Some("Common Lisp (again)"));
    }
}
