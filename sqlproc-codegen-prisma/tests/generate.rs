//! End-to-end generation over a temporary project directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use sqlproc_codegen::{collect_inputs, pipeline::Pipeline};
use sqlproc_codegen_prisma::{GenerateResult, Generator, OutputLayout};
use sqlproc_manifest::GenerationMode;
use tempfile::TempDir;

const FIND_USER: &str = "\
-- @param {String} $1:userId The user to look up
-- @param {Int} $2? Maximum number of rows
select * from posts where author = :userId limit $2
";

struct Project {
    dir: TempDir,
}

impl Project {
    fn new(sources: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("prisma/procedures");
        fs::create_dir_all(&input).unwrap();
        for (file, content) in sources {
            fs::write(input.join(file), content).unwrap();
        }
        Self { dir }
    }

    fn with_package_manifests(self) -> Self {
        let layout = self.layout();
        for dir in [&layout.client_dir, &layout.package_dir] {
            fs::create_dir_all(dir).unwrap();
            fs::write(
                dir.join("package.json"),
                r#"{"name":"client","exports":{".":"./index.js"}}"#,
            )
            .unwrap();
        }
        self
    }

    fn input_dir(&self) -> PathBuf {
        self.dir.path().join("prisma/procedures")
    }

    fn layout(&self) -> OutputLayout {
        OutputLayout {
            client_dir: self.dir.path().join("node_modules/.prisma/client"),
            package_dir: self.dir.path().join("node_modules/@prisma/client"),
            export_path: "./procedures".to_string(),
        }
    }

    fn generate(&self, mode: GenerationMode) -> eyre::Result<GenerateResult> {
        let inputs = collect_inputs(&self.input_dir())?;
        let ctx = Pipeline::new().run(inputs)?;
        Generator::from_context(ctx, mode).generate(&self.layout())
    }

    fn client_file(&self, name: &str) -> String {
        fs::read_to_string(self.layout().client_dir.join(name)).unwrap()
    }

    fn package_file(&self, name: &str) -> String {
        fs::read_to_string(self.layout().package_dir.join(name)).unwrap()
    }
}

fn read_all(dir: &Path) -> Vec<(String, String)> {
    let mut files: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            (name, fs::read_to_string(&path).unwrap())
        })
        .collect();
    files.sort();
    files
}

#[test]
fn test_execute_mode_artifacts() {
    let project = Project::new(&[
        ("findUser.sql", FIND_USER),
        ("countPosts.sql", "select count(*) from posts"),
    ])
    .with_package_manifests();

    let result = project.generate(GenerationMode::Execute).unwrap();

    assert_eq!(result.written.len(), 6);
    assert_eq!(result.registered.len(), 2);
    assert!(result.skipped.is_empty());

    insta::assert_snapshot!(project.client_file("procedures.js"), @r#"
    const{PrismaClient}=require("./index.js");const prisma=new PrismaClient();
    exports.countPosts=async function(){return await prisma.$executeRaw`select count(*) from posts`;}
    exports.findUser=async function($1,$2){const[$userId,$$2]=[$1,$2];return await prisma.$executeRaw`select * from posts where author = ${$userId} limit ${$2}`;}
    "#);

    insta::assert_snapshot!(project.client_file("procedures.mjs"), @r#"
    import{PrismaClient}from"./index.js";const prisma=new PrismaClient();
    export async function countPosts(){return await prisma.$executeRaw`select count(*) from posts`;}
    export async function findUser($1,$2){const[$userId,$$2]=[$1,$2];return await prisma.$executeRaw`select * from posts where author = ${$userId} limit ${$2}`;}
    "#);

    insta::assert_snapshot!(project.client_file("procedures.d.ts"), @r#"
    import * as runtime from "@prisma/client/runtime/library";
    /**
     */
    export const countPosts: () => runtime.PrismaPromise<number>;
    /**
     * @param userId The user to look up
     * @param $2 Maximum number of rows
     */
    export const findUser: (userId: string, $2: number | null) => runtime.PrismaPromise<number>;
    "#);
}

#[test]
fn test_compose_mode_artifacts() {
    let project = Project::new(&[("findUser.sql", FIND_USER)]);

    project.generate(GenerationMode::Compose).unwrap();

    insta::assert_snapshot!(project.client_file("procedures.js"), @r#"
    const{Prisma}=require("./index.js");
    exports.findUser=async function($1,$2){const[$userId,$$2]=[$1,$2];return Prisma.sql`select * from posts where author = ${$userId} limit ${$2}`;}
    "#);
    assert!(
        project
            .client_file("procedures.d.ts")
            .ends_with("=> Promise<runtime.Sql>;")
    );
}

#[test]
fn test_shims_and_exports() {
    let project = Project::new(&[("findUser.sql", FIND_USER)]).with_package_manifests();

    project.generate(GenerationMode::Execute).unwrap();

    assert_eq!(
        project.package_file("procedures.js"),
        r#""use strict";module.exports={...require(".prisma/client/procedures")};"#
    );
    assert_eq!(
        project.package_file("procedures.mjs"),
        r#"export*from"../../.prisma/client/procedures.mjs";"#
    );
    assert_eq!(
        project.package_file("procedures.d.ts"),
        r#"export*from".prisma/client/procedures";"#
    );

    for manifest in [
        project.client_file("package.json"),
        project.package_file("package.json"),
    ] {
        let value: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        let exports = value["exports"].as_object().unwrap();
        let keys: Vec<_> = exports.keys().map(String::as_str).collect();

        assert_eq!(keys, vec![".", "./procedures"]);
        assert_eq!(exports["./procedures"]["import"]["node"], "./procedures.mjs");
        assert_eq!(exports["./procedures"]["default"], "./procedures.js");
    }
}

#[test]
fn test_missing_package_manifests_are_skipped() {
    let project = Project::new(&[("findUser.sql", FIND_USER)]);

    let result = project.generate(GenerationMode::Execute).unwrap();

    assert!(result.registered.is_empty());
    assert_eq!(result.skipped.len(), 2);
    assert!(!project.layout().client_dir.join("package.json").exists());
}

#[test]
fn test_empty_input_directory_yields_preambles() {
    let project = Project::new(&[]);

    project.generate(GenerationMode::Execute).unwrap();

    assert_eq!(
        project.client_file("procedures.js"),
        "const{PrismaClient}=require(\"./index.js\");const prisma=new PrismaClient();\n"
    );
    assert_eq!(
        project.client_file("procedures.mjs"),
        "import{PrismaClient}from\"./index.js\";const prisma=new PrismaClient();\n"
    );
    assert_eq!(
        project.client_file("procedures.d.ts"),
        "import * as runtime from \"@prisma/client/runtime/library\";\n"
    );
}

#[test]
fn test_missing_input_directory_yields_preambles() {
    let project = Project::new(&[]);
    fs::remove_dir(project.input_dir()).unwrap();

    project.generate(GenerationMode::Compose).unwrap();

    assert_eq!(
        project.client_file("procedures.js"),
        "const{Prisma}=require(\"./index.js\");\n"
    );
}

#[test]
fn test_generation_is_deterministic() {
    let sources = [
        ("findUser.sql", FIND_USER),
        ("countPosts.sql", "select count(*) from posts"),
        (
            "archive.sql",
            "-- @param {DateTime} $2:before\nupdate posts set archived = true where created < :before",
        ),
    ];
    let first = Project::new(&sources).with_package_manifests();
    let second = Project::new(&sources).with_package_manifests();

    first.generate(GenerationMode::Execute).unwrap();
    second.generate(GenerationMode::Execute).unwrap();

    assert_eq!(
        read_all(&first.layout().client_dir),
        read_all(&second.layout().client_dir)
    );
    assert_eq!(
        read_all(&first.layout().package_dir),
        read_all(&second.layout().package_dir)
    );

    let rerun = first.generate(GenerationMode::Execute).unwrap();
    assert!(rerun.written.is_empty());
    assert_eq!(rerun.unchanged.len(), 6);
}

#[test]
fn test_invalid_names_write_nothing() {
    let project = Project::new(&[("class.sql", "select 1"), ("findUser.sql", FIND_USER)]);

    let report = project.generate(GenerationMode::Execute).unwrap_err();

    assert!(report.to_string().contains("class"));
    assert!(!project.layout().client_dir.exists());
}

#[test]
fn test_unresolved_placeholder_writes_nothing() {
    let project = Project::new(&[(
        "findUser.sql",
        "-- @param {Int} $1\n-- @param {Int} $2\nselect $3",
    )]);

    let report = project.generate(GenerationMode::Execute).unwrap_err();
    let err = report.downcast_ref::<sqlproc_source::Error>().unwrap();

    assert!(matches!(
        err,
        sqlproc_source::Error::UnresolvedPositional { position, .. } if position == "3"
    ));
    assert!(!project.layout().client_dir.exists());
}
