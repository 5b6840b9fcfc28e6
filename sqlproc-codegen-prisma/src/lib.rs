//! Prisma Client procedure generator for sqlproc.
//!
//! Renders every parsed procedure into three artifacts inside the generated
//! Prisma client directory and re-exports them from the `@prisma/client`
//! package:
//!
//! ```ignore
//! use sqlproc_codegen::{collect_inputs, pipeline::Pipeline};
//! use sqlproc_codegen_prisma::{Generator, OutputLayout};
//! use sqlproc_manifest::GenerationMode;
//!
//! let ctx = Pipeline::new().run(collect_inputs(Path::new("prisma/procedures"))?)?;
//! let generator = Generator::from_context(ctx, GenerationMode::Execute);
//!
//! // Preview files without writing
//! let files = generator.preview(&OutputLayout::default());
//!
//! // Generate files to disk
//! let result = generator.generate(&OutputLayout::default())?;
//! ```
//!
//! # Generated Output
//!
//! In the client directory (`node_modules/.prisma/client` by default):
//!
//! - `procedures.js` - CommonJS module
//! - `procedures.mjs` - ES module
//! - `procedures.d.ts` - type declarations
//!
//! In the package directory (`node_modules/@prisma/client`), one re-export
//! shim per artifact. Both `package.json` files get a `./procedures` entry in
//! their `exports` map.

mod generator;
mod skeleton;
mod type_mapper;

pub mod files;

pub use generator::{Generator, OutputLayout};
pub use skeleton::ArtifactKind;
pub use sqlproc_core::{GenerateResult, PreviewFile};
pub use type_mapper::PrismaTypeMapper;
