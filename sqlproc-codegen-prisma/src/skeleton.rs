//! Fixed skeletons of the generated artifacts.

use sqlproc_codegen::Template;
use sqlproc_manifest::GenerationMode;

const CJS_CLIENT: &str =
    r#"const{PrismaClient}=require("./index.js");const prisma=new PrismaClient();"#;
const MJS_CLIENT: &str = r#"import{PrismaClient}from"./index.js";const prisma=new PrismaClient();"#;
const CJS_NAMESPACE: &str = r#"const{Prisma}=require("./index.js");"#;
const MJS_NAMESPACE: &str = r#"import{Prisma}from"./index.js";"#;
const DECLARATION_PREAMBLE: &str = r#"import * as runtime from "@prisma/client/runtime/library";"#;

const CJS_EXECUTE: Template = Template::new(
    "exports.{{name}}=async function({{args}}){{{init}}return await prisma.$executeRaw{{code}};}",
);
const MJS_EXECUTE: Template = Template::new(
    "export async function {{name}}({{args}}){{{init}}return await prisma.$executeRaw{{code}};}",
);
const CJS_COMPOSE: Template =
    Template::new("exports.{{name}}=async function({{args}}){{{init}}return Prisma.sql{{code}};}");
const MJS_COMPOSE: Template =
    Template::new("export async function {{name}}({{args}}){{{init}}return Prisma.sql{{code}};}");
const DECLARATION: Template =
    Template::new("/**{{docs}}\n */\nexport const {{name}}: ({{params}}) => {{returns}};");

/// The three artifacts generated for a batch of procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    CommonJs,
    EsModule,
    Declaration,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [
        ArtifactKind::CommonJs,
        ArtifactKind::EsModule,
        ArtifactKind::Declaration,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            ArtifactKind::CommonJs => "procedures.js",
            ArtifactKind::EsModule => "procedures.mjs",
            ArtifactKind::Declaration => "procedures.d.ts",
        }
    }

    /// First line of the artifact, shared by every procedure in it.
    pub fn preamble(&self, mode: GenerationMode) -> &'static str {
        match (self, mode) {
            (ArtifactKind::CommonJs, GenerationMode::Execute) => CJS_CLIENT,
            (ArtifactKind::EsModule, GenerationMode::Execute) => MJS_CLIENT,
            (ArtifactKind::CommonJs, GenerationMode::Compose) => CJS_NAMESPACE,
            (ArtifactKind::EsModule, GenerationMode::Compose) => MJS_NAMESPACE,
            (ArtifactKind::Declaration, _) => DECLARATION_PREAMBLE,
        }
    }

    pub(crate) fn template(&self, mode: GenerationMode) -> Template {
        match (self, mode) {
            (ArtifactKind::CommonJs, GenerationMode::Execute) => CJS_EXECUTE,
            (ArtifactKind::EsModule, GenerationMode::Execute) => MJS_EXECUTE,
            (ArtifactKind::CommonJs, GenerationMode::Compose) => CJS_COMPOSE,
            (ArtifactKind::EsModule, GenerationMode::Compose) => MJS_COMPOSE,
            (ArtifactKind::Declaration, _) => DECLARATION,
        }
    }
}

/// Declared return type of every generated procedure.
pub(crate) fn return_type(mode: GenerationMode) -> &'static str {
    match mode {
        GenerationMode::Execute => "runtime.PrismaPromise<number>",
        GenerationMode::Compose => "Promise<runtime.Sql>",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_are_distinct() {
        let names: Vec<_> = ArtifactKind::ALL.iter().map(|k| k.file_name()).collect();

        assert_eq!(names, vec!["procedures.js", "procedures.mjs", "procedures.d.ts"]);
    }

    #[test]
    fn test_declaration_preamble_ignores_mode() {
        assert_eq!(
            ArtifactKind::Declaration.preamble(GenerationMode::Execute),
            ArtifactKind::Declaration.preamble(GenerationMode::Compose)
        );
    }
}
