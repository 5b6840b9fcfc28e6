//! Parsing of annotated SQL procedure sources.
//!
//! A source starts with a block of `-- @param` comments declaring typed,
//! optionally aliased parameters, followed by the SQL body:
//!
//! ```sql
//! -- @param {String} $1:userId The user to look up
//! -- @param {Int} $2? Maximum number of rows
//! select * from posts where author = :userId limit $2
//! ```
//!
//! [`ParsedSource::parse`] turns such a file into a parameter model and a
//! body whose placeholders have been rewritten into template-literal
//! substitutions. Every placeholder must resolve to a declaration.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod header;
mod placeholder;
mod source;

pub use error::{Error, Result, SourceContext};
pub use source::{ParameterDeclaration, Parameters, ParsedSource, Position};
