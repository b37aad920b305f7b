//! Go AST builders for generating interfaces, type declarations and methods.
//!
//! These provide a high-level API for constructing Go syntax,
//! which can then be rendered via CodeBuilder.

mod decls;
mod file;
mod interface;
mod method;

pub use decls::{MapTypeDecl, TypeAssertion};
pub use file::{GENERATED_HEADER, GoFile};
pub use interface::{Interface, InterfaceMethod};
pub use method::{Method, Param, if_block};
