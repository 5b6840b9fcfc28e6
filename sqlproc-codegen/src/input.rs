//! Procedure source collection.

use std::path::{Path, PathBuf};

use sqlproc_source::{Error, Result};

/// Extension of the files picked up from the input directory.
pub const SOURCE_EXTENSION: &str = "sql";

/// A raw SQL source read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInput {
    /// Logical procedure name (the file stem)
    pub name: String,
    /// File name used in diagnostics
    pub filename: String,
    pub content: String,
}

impl SourceInput {
    pub fn new(
        name: impl Into<String>,
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Build an input from an in-memory `<name>.sql` file.
    pub fn from_sql(name: &str, content: impl Into<String>) -> Self {
        Self::new(name, format!("{name}.{SOURCE_EXTENSION}"), content)
    }
}

/// Read every `*.sql` file of `dir`, sorted by file name.
///
/// A missing directory yields no inputs. Subdirectories are not traversed.
pub fn collect_inputs(dir: &Path) -> Result<Vec<SourceInput>> {
    read_sources(dir).inspect_err(|e| {
        tracing::error!(error = %e, "unable to read procedure sources");
    })
}

fn read_sources(dir: &Path) -> Result<Vec<SourceInput>> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "input directory not found, no procedures to generate");
        return Ok(Vec::new());
    }

    let mut paths = list_sources(dir)?;
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut inputs = Vec::with_capacity(paths.len());
    for path in paths {
        let content = std::fs::read_to_string(&path).map_err(|source| io_error(&path, source))?;
        let filename = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        tracing::debug!(file = %filename, "read procedure source");
        inputs.push(SourceInput::new(name, filename, content));
    }

    Ok(inputs)
}

fn list_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| io_error(dir, source))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| io_error(dir, source))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            paths.push(path);
        }
    }
    Ok(paths)
}

fn io_error(path: &Path, source: std::io::Error) -> Box<Error> {
    Box::new(Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
