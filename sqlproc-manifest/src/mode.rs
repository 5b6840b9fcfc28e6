//! Generation modes.

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// What each generated procedure does when called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Run the statement and resolve to the affected row count
    #[default]
    Execute,
    /// Build a composable SQL fragment without running it
    Compose,
}

impl GenerationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMode::Execute => "execute",
            GenerationMode::Compose => "compose",
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "execute" | "exec" => Ok(GenerationMode::Execute),
            "compose" | "sql" => Ok(GenerationMode::Compose),
            _ => Err(format!(
                "unknown mode '{}', expected 'execute' or 'compose'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            GenerationMode::from_str("execute").unwrap(),
            GenerationMode::Execute
        );
        assert_eq!(
            GenerationMode::from_str("Compose").unwrap(),
            GenerationMode::Compose
        );
        assert_eq!(
            GenerationMode::from_str("sql").unwrap(),
            GenerationMode::Compose
        );
        assert!(GenerationMode::from_str("query").is_err());
    }

    #[test]
    fn test_default_is_execute() {
        assert_eq!(GenerationMode::default(), GenerationMode::Execute);
    }

    #[test]
    fn test_deserialize() {
        let mode: GenerationMode = serde_json::from_str(r#""compose""#).unwrap();
        assert_eq!(mode, GenerationMode::Compose);
        assert!(serde_json::from_str::<GenerationMode>(r#""Compose""#).is_err());
    }
}
