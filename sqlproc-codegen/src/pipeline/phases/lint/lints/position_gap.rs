//! Lint for undeclared positions below the highest declared one.

use sqlproc_source::{ParsedSource, Position};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about argument slots without a declaration.
///
/// Such slots still become arguments, typed as unknown.
pub struct PositionGapLint;

impl Lint for PositionGapLint {
    fn name(&self) -> &'static str {
        "position-gap"
    }

    fn description(&self) -> &'static str {
        "Detect positions that are skipped in the parameter header"
    }

    fn check(&self, source: &ParsedSource, diagnostics: &mut Vec<Diagnostic>) {
        let missing: Vec<_> = (1..source.max_position())
            .map(Position::new)
            .filter(|position| !source.params.contains_key(position))
            .map(|position| position.key())
            .collect();

        if missing.is_empty() {
            return;
        }

        diagnostics.push(
            Diagnostic::warning(
                "lint",
                format!(
                    "'{}' never declares {}, the argument will be untyped",
                    source.name,
                    missing.join(", ")
                ),
            )
            .at(&source.filename),
        );
    }
}
