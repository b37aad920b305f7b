//! The generators shipped with the binary.

use protods_codegen::generation::GeneratorRegistry;
use protods_codegen_go::ItypesGenerator;

/// Build the registry of every built-in generator.
pub fn registry() -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::new();
    registry.register(ItypesGenerator::new());
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_generators() {
        let registry = registry();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["itypes"]);
        assert!(registry.get("itypes").is_ok());
    }
}
