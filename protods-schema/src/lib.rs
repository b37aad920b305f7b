//! Protobuf schema parsing for the protods interface generator.
//!
//! Parses the subset of `.proto` syntax the generator consumes into a small
//! AST ([`Proto`]). Declarations that do not affect accessor generation are
//! still parsed (so the file is validated) but only kept as [`Other`] nodes.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod ast;
mod error;
mod lexer;
mod parser;

use std::{path::Path, str::FromStr};

pub use ast::*;
pub use error::{Error, Result, SourceContext};

/// File suffix every schema must carry.
pub const PROTO_SUFFIX: &str = ".proto";

impl FromStr for Proto {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "schema.proto")
    }
}

impl Proto {
    /// Parse a `.proto` file from the given path.
    ///
    /// Fails with [`Error::InvalidSuffix`] if the file name does not end in
    /// `.proto`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if !filename.ends_with(PROTO_SUFFIX) {
            return Err(Box::new(Error::InvalidSuffix { filename }));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse schema text with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parser::parse(&SourceContext::new(content, filename))
    }
}
