//! Model builder and shared code generation utilities for protods.
//!
//! This crate turns a parsed schema ([`protods_schema::Proto`]) into the
//! resolved intermediate representation ([`protods_ir::File`]) and provides
//! the language-agnostic pieces generators are built from.
//!
//! # Module Organization
//!
//! - [`pipeline`] - Model builder phases (lower, resolve), diagnostics, plugins
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Generator registry and output file naming
//! - [`language`] - Generator, TypeMapper and Formatter traits
//! - [`testing`] - Test utilities (feature-gated)

mod error;

pub mod builder;
pub mod generation;
pub mod language;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{BuildError, GenerateError};
pub use pipeline::build;
