use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while building the intermediate representation.
///
/// Returned inside an [`eyre::Report`]; recover it with
/// `report.downcast_ref::<BuildError>()`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("package name not found in proto file")]
    MissingPackage,
}

/// Errors raised while selecting a generator or naming its output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("unknown generator '{name}' (available: {available})")]
    UnknownGenerator { name: String, available: String },

    #[error("expected .proto suffix: {}", path.display())]
    NotProto { path: PathBuf },
}
