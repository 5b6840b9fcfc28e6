use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// A file produced by a generation run.
pub trait GeneratedFile {
    /// File path relative to the base directory it is written into.
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content.
    fn render(&self) -> String;

    /// Write the file below `base`, creating missing parent directories.
    ///
    /// Files whose on-disk content already matches the rendering are left
    /// untouched so repeated runs do not bump modification times.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        File::new(self.path(base), self.render()).write()
    }
}

/// Outcome of writing a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// Content was written to disk.
    Written,
    /// The file already held identical content.
    Unchanged,
}

/// A concrete path + content pair ready to be persisted.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Persist the file, skipping the write when nothing changed.
    pub fn write(&self) -> Result<WriteResult> {
        if let Ok(existing) = std::fs::read_to_string(&self.path)
            && existing == self.content
        {
            return Ok(WriteResult::Unchanged);
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
        }
        std::fs::write(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;

        Ok(WriteResult::Written)
    }
}
