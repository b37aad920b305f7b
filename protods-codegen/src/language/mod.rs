//! Language-specific abstractions.
//!
//! This module provides traits for language-specific code generation:
//! - [`Generator`] - A named emitter producing one source file per schema
//! - [`TypeMapper`] - Trait for mapping schema types to language types
//! - [`Formatter`] - Best-effort source formatting

mod format;
mod traits;

pub use format::{Formatter, format_or_passthrough};
pub use traits::{Generator, TypeMapper};
