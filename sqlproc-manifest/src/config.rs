//! The `sqlproc.toml` schema.

use std::{path::PathBuf, str::FromStr};

use serde::Deserialize;

use crate::{GenerationMode, Result, error::SourceContext};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "sqlproc.toml";

pub const DEFAULT_INPUT_DIR: &str = "prisma/procedures";
pub const DEFAULT_CLIENT_DIR: &str = "node_modules/.prisma/client";
pub const DEFAULT_PACKAGE_DIR: &str = "node_modules/@prisma/client";
pub const DEFAULT_EXPORT_PATH: &str = "./procedures";

/// Root of `sqlproc.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// `[generator]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory holding the `*.sql` sources
    #[serde(default = "default_input")]
    pub input: PathBuf,

    #[serde(default)]
    pub mode: GenerationMode,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            mode: GenerationMode::default(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory receiving the generated procedure modules
    #[serde(default = "default_client")]
    pub client: PathBuf,

    /// Package directory receiving the re-export shims
    #[serde(default = "default_package")]
    pub package: PathBuf,

    /// Sub-path registered in each package.json `exports` map
    #[serde(default = "default_export", rename = "export")]
    pub export_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            client: default_client(),
            package: default_package(),
            export_path: default_export(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT_DIR)
}

fn default_client() -> PathBuf {
    PathBuf::from(DEFAULT_CLIENT_DIR)
}

fn default_package() -> PathBuf {
    PathBuf::from(DEFAULT_PACKAGE_DIR)
}

fn default_export() -> String {
    DEFAULT_EXPORT_PATH.to_string()
}

impl FromStr for Config {
    type Err = Box<crate::Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE_NAME)
    }
}

impl Config {
    /// Parse with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate(&config, &ctx)?;
    Ok(config)
}

fn validate(config: &Config, ctx: &SourceContext) -> Result<()> {
    if config.generator.input.as_os_str().is_empty() {
        return Err(ctx.validation_error("input", "input directory cannot be empty"));
    }

    let export = &config.output.export_path;
    if !export.starts_with("./") || export.len() <= 2 {
        return Err(ctx.validation_error(
            "export",
            format!("export path '{export}' must start with './', e.g. './procedures'"),
        ));
    }

    Ok(())
}
