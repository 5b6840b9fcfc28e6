//! Lint for positions declared more than once.

use sqlproc_source::ParsedSource;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when a later declaration replaces an earlier one.
pub struct DuplicatePositionLint;

impl Lint for DuplicatePositionLint {
    fn name(&self) -> &'static str {
        "duplicate-position"
    }

    fn description(&self) -> &'static str {
        "Detect positional keys declared more than once"
    }

    fn check(&self, source: &ParsedSource, diagnostics: &mut Vec<Diagnostic>) {
        for position in &source.duplicates {
            diagnostics.push(
                Diagnostic::warning(
                    "lint",
                    format!(
                        "parameter {} of '{}' is declared more than once, the last declaration wins",
                        position, source.name
                    ),
                )
                .at(&source.filename),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::phases::lint::lints::check;

    #[test]
    fn test_duplicate_position() {
        let diagnostics = check(
            &DuplicatePositionLint,
            "-- @param {Int} $1\n-- @param {String} $1:name\nselect :name",
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("$1"));
        assert_eq!(diagnostics[0].location.as_deref(), Some("proc.sql"));
    }

    #[test]
    fn test_unique_positions() {
        let diagnostics = check(
            &DuplicatePositionLint,
            "-- @param {Int} $1\n-- @param {Int} $2\nselect $1, $2",
        );

        assert!(diagnostics.is_empty());
    }
}
