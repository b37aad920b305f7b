//! Core utilities and types for the protods interface generator.
//!
//! This crate provides the small, dependency-light pieces shared across the
//! protods crates: identifier casing, generated-file writing and the optional
//! `protods.toml` configuration.

mod config;
mod file;
mod utils;

pub use config::{CONFIG_FILE_NAME, Config, GenerateConfig};
pub use file::{File, write_file};
pub use utils::{strip_marker, to_pascal_case};

/// Prefix marking an identifier as an abstraction (interface) type.
pub const ABSTRACTION_MARKER: &str = "I";
