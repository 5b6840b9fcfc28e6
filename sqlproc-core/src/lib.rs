//! Core utilities and types for the sqlproc generator.
//!
//! This crate provides the fundamental types shared by every other crate
//! in the workspace: the closed set of parameter types, identifier
//! validation for procedure names, and generated-file plumbing.

mod codegen;
mod file;
mod identifier;
mod param_type;

pub use codegen::{GenerateResult, PreviewFile};
// File operations
pub use file::{File, GeneratedFile, WriteResult};
// Identifier validation
pub use identifier::{RESERVED_WORDS, invalid_reason, is_reserved_word, is_valid_identifier};
// Fundamental types
pub use param_type::{ParamType, UnknownParamType};
