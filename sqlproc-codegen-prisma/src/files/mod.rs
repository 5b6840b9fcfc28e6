//! Files written by the Prisma generator.

mod package_json;
mod procedures;
mod shim;

pub use package_json::{ExportRegistration, PackageJson, procedures_export_entry};
pub use procedures::{ProceduresFile, parameter_list, render_procedure};
pub use shim::Shim;
