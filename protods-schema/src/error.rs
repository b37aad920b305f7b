use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for schema parsing (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source content and filename, carried through the lexer and parser so
/// errors can point into the schema text.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a syntax error pointing at `span`.
    pub fn syntax_error(
        &self,
        message: impl Into<String>,
        label: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Syntax {
            src: self.named_source(),
            span: span.into(),
            message: message.into(),
            label: label.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("expected .proto suffix: {filename}")]
    #[diagnostic(
        code(protods::invalid_suffix),
        help("schema files must end in '.proto'")
    )]
    InvalidSuffix { filename: String },

    #[error("{message}")]
    #[diagnostic(code(protods::syntax_error))]
    Syntax {
        #[source_code]
        src: NamedSource<String>,
        #[label("{label}")]
        span: SourceSpan,
        message: String,
        label: String,
    },
}

impl Error {
    /// The span a syntax error points at, if any.
    pub fn span(&self) -> Option<SourceSpan> {
        match self {
            Error::Syntax { span, .. } => Some(*span),
            _ => None,
        }
    }
}
