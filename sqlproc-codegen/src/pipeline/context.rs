//! Compilation context passed through pipeline phases.

use sqlproc_source::ParsedSource;

use super::diagnostic::{Diagnostic, Severity};
use crate::{Procedure, SourceInput};

/// State of one compilation run, filled in phase by phase.
#[derive(Debug, Default)]
pub struct CompilationContext {
    /// Raw sources, in collection order.
    pub inputs: Vec<SourceInput>,
    /// Parsed sources (populated by ParsePhase).
    pub sources: Vec<ParsedSource>,
    /// Shaped procedures (populated by ShapePhase).
    pub procedures: Vec<Procedure>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(inputs: Vec<SourceInput>) -> Self {
        Self {
            inputs,
            ..Self::default()
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the shaped procedures out of the context.
    pub fn take_procedures(&mut self) -> Vec<Procedure> {
        std::mem::take(&mut self.procedures)
    }
}
