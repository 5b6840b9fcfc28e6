//! Target-independent code generation for sqlproc.
//!
//! # Module Organization
//!
//! - [`input`] - Collecting `*.sql` sources from the input directory
//! - [`pipeline`] - Compilation phases from raw sources to [`Procedure`]s
//! - [`shape`] - Dense call-argument shapes derived from parameter models
//! - [`template`] - `{{slot}}` skeleton rendering shared by every emitter
//! - [`TypeMapper`] - Mapping declared parameter types to target types

pub mod input;
pub mod pipeline;
mod procedure;
pub mod shape;
pub mod template;
mod type_mapper;

pub use input::{SourceInput, collect_inputs};
pub use procedure::Procedure;
pub use shape::{ArgumentShape, ArgumentSlot};
pub use template::Template;
pub use type_mapper::TypeMapper;
