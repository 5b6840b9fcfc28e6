//! Compilation pipeline from raw SQL sources to renderable procedures.
//!
//! The [`Pipeline`] runs every phase over the whole batch before the next
//! phase starts:
//!
//! - `validate` - every procedure name must be a usable function name
//! - `parse` - header declarations and placeholder resolution
//! - `lint` - non-fatal diagnostics about the parsed sources
//! - `shape` - dense argument shapes, producing [`Procedure`](crate::Procedure)s
//!
//! # Example
//!
//! ```ignore
//! use sqlproc_codegen::{collect_inputs, pipeline::Pipeline};
//!
//! let inputs = collect_inputs(Path::new("prisma/procedures"))?;
//! let ctx = Pipeline::new().run(inputs)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use runner::Pipeline;
