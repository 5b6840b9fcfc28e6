//! Prisma procedure generator.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use sqlproc_codegen::{Procedure, pipeline::CompilationContext};
use sqlproc_core::{GenerateResult, GeneratedFile, PreviewFile};
use sqlproc_manifest::{
    DEFAULT_CLIENT_DIR, DEFAULT_EXPORT_PATH, DEFAULT_PACKAGE_DIR, GenerationMode, OutputConfig,
};

use crate::{
    ArtifactKind,
    files::{ExportRegistration, PackageJson, ProceduresFile, Shim},
};

const WRITE_FAILURE: &str = "unable to write files for procedure generator";

/// Where the generated files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    /// Generated client directory receiving the procedure artifacts
    pub client_dir: PathBuf,
    /// Package directory receiving the re-export shims
    pub package_dir: PathBuf,
    /// Sub-path registered in each package.json `exports` map
    pub export_path: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            client_dir: PathBuf::from(DEFAULT_CLIENT_DIR),
            package_dir: PathBuf::from(DEFAULT_PACKAGE_DIR),
            export_path: DEFAULT_EXPORT_PATH.to_string(),
        }
    }
}

impl From<&OutputConfig> for OutputLayout {
    fn from(config: &OutputConfig) -> Self {
        Self {
            client_dir: config.client.clone(),
            package_dir: config.package.clone(),
            export_path: config.export_path.clone(),
        }
    }
}

/// Renders procedures into Prisma client artifacts.
pub struct Generator {
    procedures: Vec<Procedure>,
    mode: GenerationMode,
}

impl Generator {
    pub fn new(procedures: Vec<Procedure>, mode: GenerationMode) -> Self {
        Self { procedures, mode }
    }

    /// Create a generator from a compiled pipeline context.
    pub fn from_context(mut ctx: CompilationContext, mode: GenerationMode) -> Self {
        Self::new(ctx.take_procedures(), mode)
    }

    pub fn procedures(&self) -> &[Procedure] {
        &self.procedures
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Preview generated files without writing to disk.
    ///
    /// Package manifests are not included since their content depends on
    /// what is already on disk.
    pub fn preview(&self, layout: &OutputLayout) -> Vec<PreviewFile> {
        let artifacts = ArtifactKind::ALL.map(|kind| self.artifact(kind));
        let shims = ArtifactKind::ALL.map(Shim);

        let mut files = Vec::new();
        for artifact in &artifacts {
            files.push(preview_file(artifact, &layout.client_dir));
        }
        for shim in &shims {
            files.push(preview_file(shim, &layout.package_dir));
        }
        files
    }

    /// Write every artifact and shim, then register the export.
    ///
    /// Nothing is rolled back when a later step fails.
    pub fn generate(&self, layout: &OutputLayout) -> Result<GenerateResult> {
        tracing::info!(
            procedures = self.procedures.len(),
            mode = %self.mode,
            client = %layout.client_dir.display(),
            "generating procedure modules"
        );

        self.write_all(layout).inspect_err(|e| {
            tracing::error!(error = %e, "{WRITE_FAILURE}");
        })
    }

    fn write_all(&self, layout: &OutputLayout) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for kind in ArtifactKind::ALL {
            let file = self.artifact(kind);
            let path = file.path(&layout.client_dir);
            let outcome = file.write(&layout.client_dir).wrap_err(WRITE_FAILURE)?;
            tracing::debug!(path = %path.display(), ?outcome, "artifact");
            result.record(path, outcome);
        }

        for kind in ArtifactKind::ALL {
            let shim = Shim(kind);
            let path = shim.path(&layout.package_dir);
            let outcome = shim.write(&layout.package_dir).wrap_err(WRITE_FAILURE)?;
            tracing::debug!(path = %path.display(), ?outcome, "shim");
            result.record(path, outcome);
        }

        for dir in [&layout.client_dir, &layout.package_dir] {
            let manifest = PackageJson::in_dir(dir);
            let registration = manifest
                .register_export(&layout.export_path)
                .wrap_err(WRITE_FAILURE)?;
            let path = manifest.path().to_path_buf();

            match registration {
                ExportRegistration::Registered | ExportRegistration::Unchanged => {
                    tracing::debug!(
                        path = %path.display(),
                        export = %layout.export_path,
                        "registered export"
                    );
                    result.registered.push(path);
                }
                ExportRegistration::NoExports => {
                    tracing::debug!(path = %path.display(), "package.json has no exports map");
                    result.skipped.push(path);
                }
                ExportRegistration::Missing => {
                    tracing::warn!(
                        path = %path.display(),
                        "package.json not found, export not registered"
                    );
                    result.skipped.push(path);
                }
            }
        }

        Ok(result)
    }

    fn artifact(&self, kind: ArtifactKind) -> ProceduresFile<'_> {
        ProceduresFile::new(kind, self.mode, &self.procedures)
    }
}

fn preview_file(file: &impl GeneratedFile, base: &Path) -> PreviewFile {
    PreviewFile {
        path: file.path(base).display().to_string(),
        content: file.render(),
    }
}
