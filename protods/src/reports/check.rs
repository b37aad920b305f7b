//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from schema validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema file.
    pub schema_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
    /// One-line description of the built model, when it could be built.
    pub summary: Option<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.schema_path.display()));
            if let Some(summary) = &self.summary {
                out.preformatted(&format!("  {}", summary));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_render_invalid() {
        let report = CheckReport {
            schema_path: PathBuf::from("demo.proto"),
            errors: vec!["package name not found in proto file".into()],
            warnings: vec![],
            infos: vec![],
            summary: None,
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec!["error: package name not found in proto file", ""]
        );
    }

    #[test]
    fn test_render_valid_with_info() {
        let report = CheckReport {
            schema_path: PathBuf::from("demo.proto"),
            errors: vec![],
            warnings: vec![],
            infos: vec!["top-level enum `E` skipped".into()],
            summary: Some("package demo: 1 message, 0 map types".into()),
        };

        let mut out = RecordingOutput::default();
        report.render(&mut out);
        assert_eq!(
            out.lines,
            vec![
                "info: top-level enum `E` skipped",
                "✓ demo.proto is valid",
                "  package demo: 1 message, 0 map types",
            ]
        );
    }
}
