mod check;
mod completions;
mod generate;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use sqlproc_codegen::{
    collect_inputs,
    pipeline::{CompilationContext, Pipeline, Severity},
};
use sqlproc_manifest::{CONFIG_FILE_NAME, SqlprocToml};

/// Extension trait for exiting on source or configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sqlproc_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(miette::Report::new(*e)),
        }
    }
}

impl<T> UnwrapOrExit<T> for sqlproc_source::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => exit_with(miette::Report::new(*e)),
        }
    }
}

/// Pipeline reports carrying a source error get the same treatment; any
/// other error is passed through to color-eyre.
pub(crate) trait ExitOnSourceError<T> {
    fn exit_on_source_error(self) -> Result<T>;
}

impl<T> ExitOnSourceError<T> for Result<T> {
    fn exit_on_source_error(self) -> Result<T> {
        self.map_err(|report| match report.downcast::<sqlproc_source::Error>() {
            Ok(e) => exit_with(miette::Report::new(e)),
            Err(report) => report,
        })
    }
}

fn exit_with(report: miette::Report) -> ! {
    eprintln!("{:?}", report);
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "sqlproc")]
#[command(version)]
#[command(about = "Generate typed Prisma Client procedures from annotated SQL files")]
pub(crate) struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate procedure modules into the Prisma client
    Generate(GenerateCommand),

    /// Parse and lint procedure sources without writing anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Load the configuration file.
///
/// An explicit `--config` must exist; otherwise `./sqlproc.toml` is used
/// when present and the defaults apply when it is not.
pub(crate) fn load_config(path: Option<&Path>) -> SqlprocToml {
    match path {
        Some(path) => SqlprocToml::open(path).unwrap_or_exit(),
        None => SqlprocToml::open_or_default(CONFIG_FILE_NAME).unwrap_or_exit(),
    }
}

/// Collect and compile every procedure source of `input`.
pub(crate) fn compile(input: &Path) -> Result<CompilationContext> {
    let inputs = collect_inputs(input).unwrap_or_exit();
    Pipeline::new().run(inputs).exit_on_source_error()
}

/// Print pipeline diagnostics to stderr.
pub(crate) fn print_diagnostics(ctx: &CompilationContext) {
    for diag in &ctx.diagnostics {
        match diag.severity {
            Severity::Error | Severity::Warning => {
                eprintln!("{}: {}", diag.severity, diag.message);
                if let Some(loc) = &diag.location {
                    eprintln!("  --> {}", loc);
                }
            }
            Severity::Info => {
                println!("info: {}", diag.message);
            }
        }
    }
}
