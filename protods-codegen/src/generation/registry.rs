//! Registry of the generators available to a run.
//!
//! The registry is an ordinary value: the CLI builds one at startup and
//! passes it by reference. There is no global registration.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = GeneratorRegistry::new();
//! registry.register(ItypesGenerator::new());
//!
//! let generator = registry.get("itypes")?;
//! let source = generator.generate(&file)?;
//! ```

use std::collections::BTreeMap;

use crate::{GenerateError, language::Generator};

/// Generators keyed by name, iterated in name order.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: BTreeMap<&'static str, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator, replacing any generator with the same name.
    pub fn register(&mut self, generator: impl Generator + 'static) {
        let name = generator.name();
        if self.generators.insert(name, Box::new(generator)).is_some() {
            tracing::debug!(generator = name, "replaced registered generator");
        }
    }

    /// Look up a generator by name.
    pub fn get(&self, name: &str) -> Result<&dyn Generator, GenerateError> {
        self.generators
            .get(name)
            .map(AsRef::as_ref)
            .ok_or_else(|| GenerateError::UnknownGenerator {
                name: name.to_string(),
                available: self.names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Registered generator names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.generators.keys().copied()
    }

    /// Registered generators in name order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Generator> {
        self.generators.values().map(AsRef::as_ref)
    }

    /// Get the number of registered generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use eyre::Result;
    use protods_ir::File;

    use super::*;

    struct Named(&'static str, &'static str);

    impl Generator for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn short_name(&self) -> &'static str {
            self.0
        }

        fn usage(&self) -> &'static str {
            self.1
        }

        fn file_extension(&self) -> &'static str {
            "txt"
        }

        fn generate(&self, file: &File) -> Result<Vec<u8>> {
            Ok(file.package.clone().into_bytes())
        }
    }

    #[test]
    fn test_iterates_in_name_order() {
        let mut registry = GeneratorRegistry::new();
        registry.register(Named("zeta", "last"));
        registry.register(Named("alpha", "first"));

        let names: Vec<_> = registry.iter().map(|g| g.name()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_get() {
        let mut registry = GeneratorRegistry::new();
        registry.register(Named("itypes", "interfaces"));

        let generator = registry.get("itypes").unwrap();
        assert_eq!(generator.usage(), "interfaces");
        assert_eq!(generator.generate(&File::new("demo")).unwrap(), b"demo");
    }

    #[test]
    fn test_unknown_generator() {
        let mut registry = GeneratorRegistry::new();
        registry.register(Named("itypes", "interfaces"));
        registry.register(Named("json", "json"));

        let err = registry.get("missing").err().unwrap();
        assert_eq!(
            err.to_string(),
            "unknown generator 'missing' (available: itypes, json)"
        );
    }

    #[test]
    fn test_register_replaces_same_name() {
        let mut registry = GeneratorRegistry::new();
        assert!(registry.is_empty());

        registry.register(Named("itypes", "old"));
        registry.register(Named("itypes", "new"));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("itypes").unwrap().usage(), "new");
    }
}
