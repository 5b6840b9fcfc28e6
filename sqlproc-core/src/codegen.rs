//! Shared result types for generation runs.

use std::path::PathBuf;

use crate::WriteResult;

/// A generated file for preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Path the file would be written to
    pub path: String,
    /// File content
    pub content: String,
}

/// Summary of a generation run.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content changed on disk
    pub written: Vec<PathBuf>,
    /// Files that already held the generated content
    pub unchanged: Vec<PathBuf>,
    /// Package manifests that received the export entry
    pub registered: Vec<PathBuf>,
    /// Package manifests that were missing or had no `exports` map
    pub skipped: Vec<PathBuf>,
}

impl GenerateResult {
    /// Record the outcome of writing `path`.
    pub fn record(&mut self, path: PathBuf, result: WriteResult) {
        match result {
            WriteResult::Written => self.written.push(path),
            WriteResult::Unchanged => self.unchanged.push(path),
        }
    }

    /// Total number of files touched or confirmed by the run.
    pub fn file_count(&self) -> usize {
        self.written.len() + self.unchanged.len()
    }
}
