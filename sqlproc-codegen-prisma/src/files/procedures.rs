//! Procedure artifacts of the generated client directory.

use std::path::{Path, PathBuf};

use sqlproc_codegen::{ArgumentShape, Procedure, TypeMapper};
use sqlproc_core::GeneratedFile;
use sqlproc_manifest::GenerationMode;

use crate::{ArtifactKind, PrismaTypeMapper, skeleton::return_type};

/// One artifact holding every procedure of the batch.
pub struct ProceduresFile<'a> {
    kind: ArtifactKind,
    mode: GenerationMode,
    procedures: &'a [Procedure],
}

impl<'a> ProceduresFile<'a> {
    pub fn new(kind: ArtifactKind, mode: GenerationMode, procedures: &'a [Procedure]) -> Self {
        Self {
            kind,
            mode,
            procedures,
        }
    }
}

impl GeneratedFile for ProceduresFile<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.kind.file_name())
    }

    fn render(&self) -> String {
        let procedures: Vec<_> = self
            .procedures
            .iter()
            .map(|procedure| render_procedure(self.kind, self.mode, procedure))
            .collect();

        format!("{}\n{}", self.kind.preamble(self.mode), procedures.join("\n"))
    }
}

/// Render a single procedure for one artifact kind.
pub fn render_procedure(kind: ArtifactKind, mode: GenerationMode, procedure: &Procedure) -> String {
    let template = kind.template(mode);

    match kind {
        ArtifactKind::CommonJs | ArtifactKind::EsModule => {
            let args = procedure.shape.args();
            let init = procedure.shape.initializer();
            template.render(&[
                ("name", procedure.name()),
                ("args", args.as_str()),
                ("init", init.as_str()),
                ("code", procedure.code()),
            ])
        }
        ArtifactKind::Declaration => {
            let docs = doc_lines(&procedure.shape);
            let params = parameter_list(&procedure.shape);
            template.render(&[
                ("docs", docs.as_str()),
                ("name", procedure.name()),
                ("params", params.as_str()),
                ("returns", return_type(mode)),
            ])
        }
    }
}

fn doc_lines(shape: &ArgumentShape) -> String {
    shape
        .iter()
        .map(|slot| match &slot.description {
            Some(description) => format!("\n * @param {} {}", slot.exposed_name, description),
            None => format!("\n * @param {}", slot.exposed_name),
        })
        .collect()
}

/// Typed parameter list of a declaration: `userId: string, $2: number | null`.
pub fn parameter_list(shape: &ArgumentShape) -> String {
    shape
        .iter()
        .map(|slot| {
            let ty = PrismaTypeMapper.map_slot_type(slot.ty, slot.optional);
            format!("{}: {}", slot.exposed_name, ty)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use sqlproc_source::ParsedSource;

    use super::*;

    fn procedure(name: &str, content: &str) -> Procedure {
        let filename = format!("{name}.sql");
        Procedure::new(ParsedSource::parse(name, &filename, content).unwrap())
    }

    fn user_query() -> Procedure {
        procedure(
            "findUser",
            "-- @param {String} $1:userId\n-- @param {Int} $2?\nselect * from t where id = :userId and n = $2",
        )
    }

    #[test]
    fn test_commonjs_execute() {
        let rendered =
            render_procedure(ArtifactKind::CommonJs, GenerationMode::Execute, &user_query());

        assert_eq!(
            rendered,
            "exports.findUser=async function($1,$2){const[$userId,$$2]=[$1,$2];return await prisma.$executeRaw`select * from t where id = ${$userId} and n = ${$2}`;}"
        );
    }

    #[test]
    fn test_module_variants_share_statement() {
        let procedure = user_query();
        let cjs = render_procedure(ArtifactKind::CommonJs, GenerationMode::Compose, &procedure);
        let mjs = render_procedure(ArtifactKind::EsModule, GenerationMode::Compose, &procedure);

        let body = |s: &str| s.split_once('{').map(|(_, rest)| rest.to_string());
        assert_eq!(body(&cjs), body(&mjs));
        assert!(mjs.starts_with("export async function findUser($1,$2){"));
        assert!(mjs.contains("return Prisma.sql`"));
    }

    #[test]
    fn test_declaration() {
        let rendered =
            render_procedure(ArtifactKind::Declaration, GenerationMode::Execute, &user_query());

        assert_eq!(
            rendered,
            "/**\n * @param userId\n * @param $2\n */\nexport const findUser: (userId: string, $2: number | null) => runtime.PrismaPromise<number>;"
        );
    }

    #[test]
    fn test_declaration_with_gap_and_description() {
        let rendered = render_procedure(
            ArtifactKind::Declaration,
            GenerationMode::Compose,
            &procedure("archive", "-- @param {DateTime} $2:before Cut-off date\nselect 1"),
        );

        assert_eq!(
            rendered,
            "/**\n * @param $1\n * @param before Cut-off date\n */\nexport const archive: ($1: unknown, before: Date) => Promise<runtime.Sql>;"
        );
    }

    #[test]
    fn test_no_parameters() {
        let procedure = procedure("countUsers", "select count(*) from users");

        assert_eq!(
            render_procedure(ArtifactKind::EsModule, GenerationMode::Execute, &procedure),
            "export async function countUsers(){return await prisma.$executeRaw`select count(*) from users`;}"
        );
        assert_eq!(
            render_procedure(ArtifactKind::Declaration, GenerationMode::Execute, &procedure),
            "/**\n */\nexport const countUsers: () => runtime.PrismaPromise<number>;"
        );
    }

    #[test]
    fn test_file_concatenation() {
        let procedures = vec![user_query(), procedure("countUsers", "select 1")];
        let file =
            ProceduresFile::new(ArtifactKind::CommonJs, GenerationMode::Compose, &procedures);
        let rendered = file.render();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], r#"const{Prisma}=require("./index.js");"#);
        assert!(lines[1].starts_with("exports.findUser="));
        assert!(lines[2].starts_with("exports.countUsers="));
        assert_eq!(file.path(Path::new("out")), PathBuf::from("out/procedures.js"));
    }

    #[test]
    fn test_empty_batch_is_preamble_only() {
        let file = ProceduresFile::new(ArtifactKind::Declaration, GenerationMode::Execute, &[]);

        assert_eq!(
            file.render(),
            "import * as runtime from \"@prisma/client/runtime/library\";\n"
        );
    }
}
