//! Lint for sources without SQL.

use sqlproc_source::ParsedSource;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about sources that only contain a header.
pub struct EmptyBodyLint;

impl Lint for EmptyBodyLint {
    fn name(&self) -> &'static str {
        "empty-body"
    }

    fn description(&self) -> &'static str {
        "Detect sources with no SQL after the header"
    }

    fn check(&self, source: &ParsedSource, diagnostics: &mut Vec<Diagnostic>) {
        if !source.has_body {
            diagnostics.push(
                Diagnostic::warning("lint", format!("'{}' has no SQL statement", source.name))
                    .at(&source.filename),
            );
        }
    }
}
