//! Pipeline orchestrator.

use eyre::Result;

use super::{
    CompilationContext, Phase,
    phases::{Lint, LintPhase, ParsePhase, ShapePhase, ValidatePhase},
};
use crate::SourceInput;

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, parse, lint, shape) followed by any
/// user phases. The first failing phase aborts the run.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .lint(MyLint)
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(inputs)?;
/// ```
pub struct Pipeline {
    lint: LintPhase,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline with the built-in phases and lints.
    pub fn new() -> Self {
        Self {
            lint: LintPhase::new(),
            phases: Vec::new(),
        }
    }

    /// Add a lint to the lint phase.
    pub fn lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lint = self.lint.with_lint(lint);
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline over a batch of sources.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails. Source problems are reported as
    /// [`sqlproc_source::Error`] values inside the report so callers can
    /// render them with their source spans.
    pub fn run(&self, inputs: Vec<SourceInput>) -> Result<CompilationContext> {
        tracing::info!(sources = inputs.len(), "compiling procedure sources");
        let mut ctx = CompilationContext::new(inputs);

        let mut phases: Vec<&dyn Phase> =
            vec![&ValidatePhase, &ParsePhase, &self.lint, &ShapePhase];
        phases.extend(self.phases.iter().map(|phase| phase.as_ref() as &dyn Phase));

        for phase in phases {
            tracing::debug!(phase = phase.name(), "running phase");
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use sqlproc_source::{Error, ParsedSource};

    use super::*;
    use crate::pipeline::Diagnostic;

    fn inputs(sources: &[(&str, &str)]) -> Vec<SourceInput> {
        sources
            .iter()
            .map(|(name, content)| SourceInput::from_sql(name, *content))
            .collect()
    }

    #[test]
    fn test_pipeline_produces_procedures_in_input_order() {
        let ctx = Pipeline::new()
            .run(inputs(&[
                ("getUser", "-- @param {String} $1:id\nselect * from users where id = :id"),
                ("countUsers", "select count(*) from users"),
            ]))
            .unwrap();

        let names: Vec<_> = ctx.procedures.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["getUser", "countUsers"]);
        assert_eq!(ctx.procedures[0].shape.len(), 1);
        assert!(ctx.procedures[1].shape.is_empty());
        assert!(!ctx.has_warnings());
    }

    #[test]
    fn test_empty_batch() {
        let ctx = Pipeline::new().run(Vec::new()).unwrap();

        assert!(ctx.procedures.is_empty());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_invalid_names_abort_before_parsing() {
        let report = Pipeline::new()
            .run(inputs(&[
                ("class", "select 1"),
                ("ok", "select $9"),
                ("my-proc", "select 1"),
            ]))
            .unwrap_err();

        let err = report.downcast_ref::<Error>().unwrap();
        match err {
            Error::InvalidIdentifiers { names, .. } => {
                assert_eq!(names, &vec!["class".to_string(), "my-proc".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_is_source_error() {
        let report = Pipeline::new()
            .run(inputs(&[("broken", "-- @param {Text} $1\nselect $1")]))
            .unwrap_err();

        assert!(matches!(
            report.downcast_ref::<Error>(),
            Some(Error::UnknownType { .. })
        ));
    }

    #[test]
    fn test_position_beyond_limit_is_rejected() {
        let report = Pipeline::new()
            .run(inputs(&[("huge", "-- @param {Int} $4000000000\nselect 1")]))
            .unwrap_err();

        assert!(matches!(
            report.downcast_ref::<Error>(),
            Some(Error::InvalidPosition { key, .. }) if key == "$4000000000"
        ));
    }

    #[test]
    fn test_warnings_do_not_abort() {
        let ctx = Pipeline::new()
            .run(inputs(&[("empty", "-- @param {Int} $1\n")]))
            .unwrap();

        assert_eq!(ctx.procedures.len(), 1);
        assert!(ctx.has_warnings());
    }

    #[test]
    fn test_custom_lint_and_phase() {
        struct NameLengthLint;
        impl Lint for NameLengthLint {
            fn name(&self) -> &'static str {
                "name-length"
            }
            fn description(&self) -> &'static str {
                "Warn about very short procedure names"
            }
            fn check(&self, source: &ParsedSource, diagnostics: &mut Vec<Diagnostic>) {
                if source.name.len() < 3 {
                    diagnostics.push(Diagnostic::warning("lint", "short name"));
                }
            }
        }

        struct CountingPhase(Arc<AtomicUsize>);
        impl Phase for CountingPhase {
            fn name(&self) -> &'static str {
                "count"
            }
            fn description(&self) -> &'static str {
                "Count procedures"
            }
            fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
                self.0.fetch_add(ctx.procedures.len(), Ordering::SeqCst);
                Ok(())
            }
        }

        let counter = Arc::new(AtomicUsize::new(0));
        let ctx = Pipeline::new()
            .lint(NameLengthLint)
            .phase(CountingPhase(counter.clone()))
            .run(inputs(&[("ab", "select 1"), ("abc", "select 2")]))
            .unwrap();

        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
