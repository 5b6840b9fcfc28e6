//! Lint for aliases shared by several declarations.

use std::collections::HashMap;

use sqlproc_source::{ParsedSource, Position};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when two declarations use the same alias.
///
/// Named references resolve to the lowest position carrying the alias; every
/// other declaration is exposed under its positional key.
pub struct DuplicateAliasLint;

impl Lint for DuplicateAliasLint {
    fn name(&self) -> &'static str {
        "duplicate-alias"
    }

    fn description(&self) -> &'static str {
        "Detect aliases shared by several parameters"
    }

    fn check(&self, source: &ParsedSource, diagnostics: &mut Vec<Diagnostic>) {
        let mut owners: HashMap<&str, Position> = HashMap::new();
        for decl in source.params.values() {
            if let Some(alias) = decl.alias.as_deref() {
                owners
                    .entry(alias)
                    .and_modify(|owner| *owner = (*owner).min(decl.position))
                    .or_insert(decl.position);
            }
        }

        for decl in source.params.values() {
            let Some(alias) = decl.alias.as_deref() else {
                continue;
            };
            let owner = owners[alias];
            if owner == decl.position {
                continue;
            }

            diagnostics.push(
                Diagnostic::warning(
                    "lint",
                    format!(
                        "alias '{}' of {} is already used by {}, ':{}' refers to {}",
                        alias, decl.position, owner, alias, owner
                    ),
                )
                .at(&source.filename),
            );
        }
    }
}
