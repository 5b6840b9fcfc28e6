//! Built-in lints.

mod duplicate_alias;
mod duplicate_position;
mod empty_body;
mod position_gap;

pub use duplicate_alias::DuplicateAliasLint;
pub use duplicate_position::DuplicatePositionLint;
pub use empty_body::EmptyBodyLint;
pub use position_gap::PositionGapLint;

#[cfg(test)]
fn check(lint: &dyn super::Lint, content: &str) -> Vec<crate::pipeline::Diagnostic> {
    let source = sqlproc_source::ParsedSource::parse("proc", "proc.sql", content).unwrap();
    let mut diagnostics = Vec::new();
    lint.check(&source, &mut diagnostics);
    diagnostics
}
