//! Check operation - schema validation.

use std::path::Path;

use eyre::{Context, Result};
use protods_codegen::pipeline::{Pipeline, Severity};
use protods_schema::Proto;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline over the parsed schema and returns its diagnostics.
/// A schema the model cannot be built from is reported as an error rather
/// than failing the operation.
pub fn check(proto_path: &Path, proto: &Proto) -> Result<CheckReport> {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();
    let mut summary = None;

    match Pipeline::new().run(proto) {
        Ok(mut ctx) => {
            for diag in &ctx.diagnostics {
                let msg = super::describe(diag);
                match diag.severity {
                    Severity::Warning => warnings.push(msg),
                    Severity::Info => infos.push(msg),
                }
            }
            let file = ctx.take_ir().wrap_err("Validation failed")?;
            summary = Some(format!(
                "package {}: {} message{}, {} map type{}",
                file.package,
                file.messages.len(),
                plural(file.messages.len()),
                file.maps.len(),
                plural(file.maps.len()),
            ));
        }
        Err(err) => errors.push(format!("{err:#}")),
    }

    Ok(CheckReport {
        schema_path: proto_path.to_path_buf(),
        errors,
        warnings,
        infos,
        summary,
    })
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
