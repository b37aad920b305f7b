//! Generator selection and output naming.
//!
//! - [`GeneratorRegistry`] - Generators available to a run, keyed by name
//! - [`output_file_name`] - `<schema>.<short>.<ext>` output naming

mod naming;
mod registry;

pub use naming::output_file_name;
pub use registry::GeneratorRegistry;
