//! Pipeline orchestrator.

use eyre::Result;
use protods_ir::File;
use protods_schema::Proto;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{LowerPhase, ResolvePhase},
};

/// The model builder pipeline.
///
/// Runs the built-in phases (lower, resolve) followed by any user phases,
/// calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(MyPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(&proto)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with only the built-in phases.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a parsed schema.
    ///
    /// Executes all phases in order:
    /// 1. LowerPhase - scans messages, fields and map shapes
    /// 2. ResolvePhase - resolves message references, sorts the IR
    /// 3. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally, e.g.
    /// [`BuildError::MissingPackage`](crate::BuildError::MissingPackage).
    pub fn run<'a>(&self, proto: &'a Proto) -> Result<CompilationContext<'a>> {
        let mut ctx = CompilationContext::new(proto);

        let builtin_phases: [&dyn Phase; 2] = [&LowerPhase, &ResolvePhase];

        for phase in builtin_phases {
            self.run_phase(phase, &mut ctx)?;
        }
        for phase in &self.phases {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        tracing::debug!(
            filename = %proto.filename,
            diagnostics = ctx.diagnostics.len(),
            "model built"
        );
        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext<'_>) -> Result<()> {
        let phase_name = phase.name();
        tracing::trace!(phase = phase_name, "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the intermediate representation for a parsed schema.
///
/// Diagnostics are discarded; use [`Pipeline::run`] to inspect them.
pub fn build(proto: &Proto) -> Result<File> {
    Pipeline::new().run(proto)?.take_ir()
}

#[cfg(test)]
mod tests {
    use std::{
        str::FromStr,
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use super::*;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext<'_>) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext<'_>) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct RecordingPhase(Arc<Mutex<Vec<String>>>);

    impl Phase for RecordingPhase {
        fn name(&self) -> &'static str {
            "record"
        }

        fn description(&self) -> &'static str {
            "Record the message order"
        }

        fn run(&self, ctx: &mut CompilationContext<'_>) -> Result<()> {
            let names = ctx.ir_mut()?.messages.iter().map(|m| m.name.clone());
            self.0.lock().unwrap().extend(names);
            Ok(())
        }
    }

    fn make_test_proto() -> Proto {
        Proto::from_str("package test;\nmessage Zeta {}\nmessage Alpha {}\n")
            .expect("Failed to parse test schema")
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let proto = make_test_proto();
        let ctx = Pipeline::new()
            .run(&proto)
            .expect("pipeline should succeed");

        let ir = ctx.ir.expect("IR should be populated");
        assert_eq!(ir.package, "test");
        assert_eq!(ir.messages.len(), 2);
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let proto = make_test_proto();
        let before = Arc::new(AtomicUsize::new(0));
        let after = Arc::new(AtomicUsize::new(0));

        let pipeline = Pipeline::new().plugin(CountingPlugin {
            before_count: before.clone(),
            after_count: after.clone(),
        });
        pipeline.run(&proto).expect("pipeline should succeed");

        // 2 built-in phases = 2 before + 2 after hooks
        assert_eq!(before.load(Ordering::SeqCst), 2);
        assert_eq!(after.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_user_phase_runs_after_resolve() {
        let proto = make_test_proto();
        let seen = Arc::new(Mutex::new(Vec::new()));

        Pipeline::new()
            .phase(RecordingPhase(seen.clone()))
            .run(&proto)
            .expect("pipeline should succeed");

        assert_eq!(*seen.lock().unwrap(), vec!["Alpha", "Zeta"]);
    }
}
