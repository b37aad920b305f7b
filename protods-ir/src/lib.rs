//! Intermediate representation types for the protods interface generator.
//!
//! The IR is what the model builder produces and what every generator
//! consumes:
//!
//! ```text
//! .proto (text) → protods-schema (AST) → protods-codegen (build) → protods-ir → generator
//! ```
//!
//! A [`File`] is fully resolved: every field knows whether its type is a plain
//! scalar, a declared message or a map, and every map knows whether its value
//! is a reference to a declared message. Generators never inspect type names
//! to make those decisions.

mod file;
mod types;

pub use file::{File, Message};
pub use types::{Field, FieldType, MapType, TypeRef, ValueKind};
