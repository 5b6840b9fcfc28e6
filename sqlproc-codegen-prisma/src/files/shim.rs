//! Re-export shims of the `@prisma/client` package.

use std::path::{Path, PathBuf};

use sqlproc_core::GeneratedFile;

use crate::ArtifactKind;

/// Forwards one artifact of the client directory from the package directory.
pub struct Shim(pub ArtifactKind);

impl GeneratedFile for Shim {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.0.file_name())
    }

    fn render(&self) -> String {
        match self.0 {
            ArtifactKind::CommonJs => {
                r#""use strict";module.exports={...require(".prisma/client/procedures")};"#
            }
            ArtifactKind::EsModule => r#"export*from"../../.prisma/client/procedures.mjs";"#,
            ArtifactKind::Declaration => r#"export*from".prisma/client/procedures";"#,
        }
        .to_string()
    }
}
