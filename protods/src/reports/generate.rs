//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// What happened to the generated source.
#[derive(Debug)]
pub enum GenerationResult {
    /// Written to the output path.
    Written,
    /// Dry run; the source that would have been written.
    Preview(String),
}

/// Report data from generating one schema.
#[derive(Debug)]
pub struct GenerateReport {
    /// Schema the code was generated from.
    pub schema: PathBuf,
    /// Path of the generated file.
    pub output: PathBuf,
    /// Warning messages from the model builder.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written => {
                out.key_value("Generated", &self.schema.display().to_string());
                out.added_item(&self.output.display().to_string());
            }
            GenerationResult::Preview(content) => {
                out.divider(&self.output.display().to_string());
                out.preformatted(content);
            }
        }
    }
}
