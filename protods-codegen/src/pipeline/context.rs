//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use protods_ir::File;
use protods_schema::Proto;

use super::diagnostic::Diagnostic;

/// Context passed through all pipeline phases.
///
/// Carries the schema being built, the IR under construction and the
/// diagnostics collected along the way.
#[derive(Debug)]
pub struct CompilationContext<'a> {
    /// The parsed schema being built.
    pub proto: &'a Proto,
    /// The intermediate representation (populated by LowerPhase).
    pub ir: Option<File>,
    /// Diagnostics collected during the build.
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> CompilationContext<'a> {
    /// Create a new compilation context for a schema.
    pub fn new(proto: &'a Proto) -> Self {
        Self {
            proto,
            ir: None,
            diagnostics: Vec::new(),
        }
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }

    /// Borrow the IR mutably, failing if LowerPhase has not run.
    pub fn ir_mut(&mut self) -> Result<&mut File> {
        self.ir
            .as_mut()
            .ok_or_else(|| eyre!("IR not set - did LowerPhase run?"))
    }

    /// Take the IR out of the context.
    pub fn take_ir(&mut self) -> Result<File> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("IR not set - did LowerPhase run?"))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn proto() -> Proto {
        Proto::from_str("package test;").expect("Failed to parse test schema")
    }

    #[test]
    fn test_context_creation() {
        let proto = proto();
        let ctx = CompilationContext::new(&proto);

        assert!(ctx.ir.is_none());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_context_diagnostics() {
        let proto = proto();
        let mut ctx = CompilationContext::new(&proto);

        ctx.add_warning("test", "test warning");
        ctx.add_info("test", "just info");
        ctx.add_diagnostic(Diagnostic::warning("test", "located warning").at("Hello"));

        assert_eq!(ctx.diagnostics.len(), 3);
        let warnings: Vec<_> = ctx.warnings().map(|d| d.message.as_str()).collect();
        assert_eq!(warnings, vec!["test warning", "located warning"]);
    }

    #[test]
    fn test_take_ir_before_lower_fails() {
        let proto = proto();
        let mut ctx = CompilationContext::new(&proto);

        assert!(ctx.ir_mut().is_err());
        assert!(ctx.take_ir().is_err());

        ctx.ir = Some(File::new("test"));
        assert_eq!(ctx.take_ir().unwrap().package, "test");
        assert!(ctx.ir.is_none());
    }
}
