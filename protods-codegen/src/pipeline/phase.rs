//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the model builder pipeline.
///
/// Phases are executed in order by the pipeline. Each phase can read and
/// modify the compilation context, adding to the IR or the diagnostics.
///
/// Built-in phases:
/// - `LowerPhase` - scans the schema into an unresolved IR
/// - `ResolvePhase` - resolves message references and orders the IR
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()>;
}
