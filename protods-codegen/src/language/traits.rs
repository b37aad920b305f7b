//! Language-agnostic code generation traits.

use eyre::Result;
use protods_ir::File;

use super::Formatter;

/// Trait for language-specific generators.
///
/// A generator turns one built [`File`] into the bytes of one output source
/// file. Implementations must be deterministic: the same `File` always
/// yields the same bytes.
pub trait Generator: Send + Sync {
    /// Registry identifier (e.g., "itypes").
    fn name(&self) -> &'static str;

    /// Short name used in output file names (`<schema>.<short>.<ext>`).
    fn short_name(&self) -> &'static str;

    /// One-line description shown by `protods list`.
    fn usage(&self) -> &'static str;

    /// File extension for generated source files (e.g., "go").
    fn file_extension(&self) -> &'static str;

    /// Emit source for a built file.
    fn generate(&self, file: &File) -> Result<Vec<u8>>;

    /// Formatter to run over the generated source, if any.
    fn formatter(&self) -> Option<&dyn Formatter> {
        None
    }
}

/// Trait for mapping schema types to language-specific type strings.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a declared scalar type; names without a mapping pass through.
    fn map_scalar<'a>(&self, proto_type: &'a str) -> &'a str;

    /// Type of a reference to a message value (e.g., `*Example` in Go).
    fn map_reference(&self, message: &str) -> String;

    /// Type of a repeated field with the given element type.
    fn map_repeated(&self, element: &str) -> String;
}
