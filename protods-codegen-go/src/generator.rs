use eyre::Result;
use protods_codegen::language::{Formatter, Generator};
use protods_ir::File;

use crate::{GoFmt, itypes};

/// Generator emitting Go interface types and proto setters (`itypes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct ItypesGenerator {
    formatter: GoFmt,
}

impl ItypesGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Generator for ItypesGenerator {
    fn name(&self) -> &'static str {
        "itypes"
    }

    fn short_name(&self) -> &'static str {
        "itypes"
    }

    fn usage(&self) -> &'static str {
        "generates interface types and proto setters"
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn generate(&self, file: &File) -> Result<Vec<u8>> {
        tracing::debug!(
            package = %file.package,
            messages = file.messages.len(),
            maps = file.maps.len(),
            "emitting itypes"
        );
        Ok(itypes::render(file)?.into_bytes())
    }

    fn formatter(&self) -> Option<&dyn Formatter> {
        Some(&self.formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let generator = ItypesGenerator::new();
        assert_eq!(generator.name(), "itypes");
        assert_eq!(generator.short_name(), "itypes");
        assert_eq!(generator.file_extension(), "go");
        assert_eq!(
            generator.formatter().map(|f| f.name()),
            Some("gofmt")
        );
    }

    #[test]
    fn test_generate_is_deterministic() {
        let file = File::new("demo");
        let generator = ItypesGenerator::new();
        let first = generator.generate(&file).unwrap();
        assert_eq!(first, generator.generate(&file).unwrap());
        assert_eq!(
            String::from_utf8(first).unwrap(),
            "// Code generated by protods. DO NOT EDIT.\n\npackage demo\n"
        );
    }
}
