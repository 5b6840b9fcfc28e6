//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - rejects procedure names that are not usable identifiers
//! - [`ParsePhase`] - parses headers and resolves placeholders
//! - [`LintPhase`] - collects non-fatal diagnostics
//! - [`ShapePhase`] - derives argument shapes

mod lint;
mod parse;
mod shape;
mod validate;

pub use lint::{
    DuplicateAliasLint, DuplicatePositionLint, EmptyBodyLint, Lint, LintInfo, LintPhase,
    PositionGapLint,
};
pub use parse::ParsePhase;
pub use shape::ShapePhase;
pub use validate::ValidatePhase;
