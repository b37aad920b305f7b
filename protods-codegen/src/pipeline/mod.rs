//! Model builder pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that turns a parsed
//! schema into the resolved intermediate representation. The pipeline
//! provides:
//!
//! - Explicit phase boundaries (lower → resolve)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection for skipped schema constructs
//!
//! # Example
//!
//! ```ignore
//! use protods_codegen::pipeline::Pipeline;
//!
//! let mut ctx = Pipeline::new().run(&proto)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//!
//! let file = ctx.take_ir()?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::{Pipeline, build};
