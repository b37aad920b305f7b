//! Generate operation - one schema through the pipeline and a generator.

use std::path::Path;

use eyre::{Context, Result};
use protods_codegen::{
    generation::output_file_name,
    language::{Generator, format_or_passthrough},
    pipeline::Pipeline,
};
use protods_core::File;
use protods_schema::Proto;

use crate::reports::{GenerateReport, GenerationResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory generated files are written to.
    pub output_dir: &'a Path,
    /// Run the generator's formatter, if it has one.
    pub format: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation for one parsed schema.
pub fn generate(
    proto_path: &Path,
    proto: &Proto,
    generator: &dyn Generator,
    opts: &GenerateOptions,
) -> Result<GenerateReport> {
    let output_path = opts
        .output_dir
        .join(output_file_name(proto_path, generator)?);

    // Builder errors reach the caller as-is so they can be downcast.
    let mut ctx = Pipeline::new().run(proto)?;

    let warnings = ctx
        .warnings()
        .map(super::describe)
        .collect::<Vec<_>>();

    let file = ctx.take_ir()?;
    let mut content = generator
        .generate(&file)
        .wrap_err_with(|| format!("{} failed on '{}'", generator.name(), proto_path.display()))?;

    if let Some(formatter) = generator.formatter().filter(|_| opts.format) {
        content = format_or_passthrough(formatter, content);
    }

    let file = File::new(output_path, content);
    let result = if opts.dry_run {
        GenerationResult::Preview(String::from_utf8_lossy(file.content()).into_owned())
    } else {
        file.write()
            .wrap_err_with(|| format!("failed to write '{}'", file.path().display()))?;
        GenerationResult::Written
    };

    tracing::debug!(
        schema = %proto_path.display(),
        output = %file.path().display(),
        dry_run = opts.dry_run,
        "generated"
    );

    Ok(GenerateReport {
        schema: proto_path.to_path_buf(),
        output: file.path().to_path_buf(),
        warnings,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use protods_codegen::BuildError;
    use protods_codegen_go::ItypesGenerator;
    use tempfile::TempDir;

    use super::*;

    const SCHEMA: &str = "package demo;\nmessage A { string name = 1; oneof o { int32 x = 2; } }\n";

    fn opts(dir: &Path, dry_run: bool) -> GenerateOptions<'_> {
        GenerateOptions {
            output_dir: dir,
            format: false,
            dry_run,
        }
    }

    #[test]
    fn test_writes_output_file() {
        let temp = TempDir::new().unwrap();
        let proto = Proto::from_str(SCHEMA).unwrap();

        let report = generate(
            Path::new("schemas/demo.proto"),
            &proto,
            &ItypesGenerator::new(),
            &opts(temp.path(), false),
        )
        .unwrap();

        let expected = temp.path().join("demo.itypes.go");
        assert_eq!(report.output, expected);
        assert!(matches!(report.result, GenerationResult::Written));

        let written = std::fs::read_to_string(&expected).unwrap();
        assert!(written.starts_with("// Code generated by protods. DO NOT EDIT."));
        assert!(written.contains("func (m *A) SetName(val string) {"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let proto = Proto::from_str(SCHEMA).unwrap();

        let report = generate(
            Path::new("demo.proto"),
            &proto,
            &ItypesGenerator::new(),
            &opts(temp.path(), true),
        )
        .unwrap();

        let GenerationResult::Preview(content) = &report.result else {
            panic!("expected a preview");
        };
        assert!(content.contains("package demo"));
        assert!(!report.output.exists());
    }

    #[test]
    fn test_unsupported_constructs_reported_as_warnings() {
        let temp = TempDir::new().unwrap();
        let proto = Proto::from_str(SCHEMA).unwrap();

        let report = generate(
            Path::new("demo.proto"),
            &proto,
            &ItypesGenerator::new(),
            &opts(temp.path(), true),
        )
        .unwrap();

        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("oneof `o` is not supported"));
    }

    #[test]
    fn test_build_error_propagates_unwrapped() {
        let temp = TempDir::new().unwrap();
        let proto = Proto::from_str("message A {}\n").unwrap();

        let err = generate(
            Path::new("demo.proto"),
            &proto,
            &ItypesGenerator::new(),
            &opts(temp.path(), false),
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "package name not found in proto file");
        assert!(matches!(
            err.downcast_ref::<BuildError>(),
            Some(BuildError::MissingPackage)
        ));
        assert!(!temp.path().join("demo.itypes.go").exists());
    }

    #[test]
    fn test_rejects_non_proto_path() {
        let temp = TempDir::new().unwrap();
        let proto = Proto::from_str(SCHEMA).unwrap();

        let err = generate(
            Path::new("demo.txt"),
            &proto,
            &ItypesGenerator::new(),
            &opts(temp.path(), false),
        )
        .unwrap_err();
        assert!(err.to_string().contains("expected .proto suffix"));
    }
}
