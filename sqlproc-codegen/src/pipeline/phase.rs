//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the compilation pipeline.
///
/// Phases run in order over the whole batch. Each phase reads and updates the
/// compilation context; fatal problems are returned as errors, anything else
/// is recorded as a diagnostic.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and logs).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
