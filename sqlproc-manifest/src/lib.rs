//! Configuration for the sqlproc generator.
//!
//! Every key of `sqlproc.toml` is optional; an empty file yields the same
//! configuration as [`Config::default`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod mode;

pub use config::{
    CONFIG_FILE_NAME, Config, DEFAULT_CLIENT_DIR, DEFAULT_EXPORT_PATH, DEFAULT_INPUT_DIR,
    DEFAULT_PACKAGE_DIR, GeneratorConfig, OutputConfig,
};
pub use error::{Error, Result, SourceContext};
pub use file::SqlprocToml;
pub use mode::GenerationMode;
