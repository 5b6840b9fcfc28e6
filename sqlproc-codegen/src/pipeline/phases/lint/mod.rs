//! Lint phase - non-fatal checks on parsed sources.

pub mod lints;
mod rule;

use eyre::{Result, bail};
pub use lints::{DuplicateAliasLint, DuplicatePositionLint, EmptyBodyLint, PositionGapLint};
pub use rule::{Lint, LintInfo};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that runs configurable lints over every parsed source.
pub struct LintPhase {
    lints: Vec<Box<dyn Lint>>,
}

impl LintPhase {
    /// Create a new lint phase with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicatePositionLint),
                Box::new(PositionGapLint),
                Box::new(DuplicateAliasLint),
                Box::new(EmptyBodyLint),
            ],
        }
    }

    /// Create a lint phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for LintPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for LintPhase {
    fn name(&self) -> &'static str {
        "lint"
    }

    fn description(&self) -> &'static str {
        "Collect diagnostics about parsed sources"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for source in &ctx.sources {
            for lint in &self.lints {
                lint.check(source, &mut ctx.diagnostics);
            }
        }

        for diagnostic in ctx.warnings() {
            tracing::debug!(%diagnostic, "lint");
        }

        // Warnings are allowed, errors only come from custom lints
        if ctx.has_errors() {
            bail!("Lint failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sqlproc_source::ParsedSource;

    use super::*;
    use crate::pipeline::Diagnostic;

    fn context(sources: &[(&str, &str)]) -> CompilationContext {
        let mut ctx = CompilationContext::default();
        for (name, content) in sources {
            let filename = format!("{name}.sql");
            ctx.sources
                .push(ParsedSource::parse(*name, &filename, content).unwrap());
        }
        ctx
    }

    #[test]
    fn test_lint_info() {
        let names: Vec<_> = LintPhase::new()
            .lint_info()
            .into_iter()
            .map(|info| info.name)
            .collect();

        assert_eq!(
            names,
            vec![
                "duplicate-position",
                "position-gap",
                "duplicate-alias",
                "empty-body"
            ]
        );
    }

    #[test]
    fn test_warnings_allowed() {
        let mut ctx = context(&[("noop", "-- @param {Int} $1\n")]);

        assert!(LintPhase::new().run(&mut ctx).is_ok());
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _source: &ParsedSource, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("lint", "forced error"));
            }
        }

        let mut ctx = context(&[("getUser", "select 1")]);
        let result = LintPhase::empty().with_lint(AlwaysErrorLint).run(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_clean_sources_have_no_diagnostics() {
        let mut ctx = context(&[(
            "getUser",
            "-- @param {String} $1:id\n-- @param {Int} $2?\nselect * from users where id = :id limit $2",
        )]);

        LintPhase::new().run(&mut ctx).unwrap();

        assert!(ctx.diagnostics.is_empty());
    }
}
