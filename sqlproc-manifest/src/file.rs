use std::path::{Path, PathBuf};

use crate::{Config, Result};

/// A `sqlproc.toml` file with both raw content and parsed configuration.
#[derive(Debug)]
pub struct SqlprocToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl SqlprocToml {
    /// Open and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Open `path` if it exists, otherwise fall back to the defaults.
    ///
    /// Only used for the implicit lookup; an explicitly requested file that
    /// is missing goes through [`SqlprocToml::open`] and fails.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::open(path);
        }

        Ok(Self {
            path: path.to_path_buf(),
            content: String::new(),
            config: Config::default(),
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content (empty when the defaults were used).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the file and return the configuration.
    pub fn into_config(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{Error, GenerationMode};

    #[test]
    fn test_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sqlproc.toml");
        std::fs::write(&path, "[generator]\nmode = \"compose\"\n").unwrap();

        let file = SqlprocToml::open(&path).unwrap();

        assert_eq!(file.path(), path);
        assert_eq!(file.config().generator.mode, GenerationMode::Compose);
        assert!(file.content().contains("compose"));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = SqlprocToml::open(dir.path().join("sqlproc.toml")).unwrap_err();

        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open_or_default_missing_file() {
        let dir = TempDir::new().unwrap();
        let file = SqlprocToml::open_or_default(dir.path().join("sqlproc.toml")).unwrap();

        assert!(file.content().is_empty());
        assert_eq!(file.config().generator.mode, GenerationMode::Execute);
        assert_eq!(file.config().output.export_path, "./procedures");
    }

    #[test]
    fn test_open_or_default_reports_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sqlproc.toml");
        std::fs::write(&path, "[generator\n").unwrap();

        let err = SqlprocToml::open_or_default(&path).unwrap_err();

        assert!(matches!(*err, Error::Parse { .. }));
    }
}
