use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sqlproc_codegen_prisma::{GenerateResult, Generator, OutputLayout};
use sqlproc_manifest::{Config, GenerationMode};

use super::{compile, load_config, print_diagnostics};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to sqlproc.toml (defaults to ./sqlproc.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the *.sql procedure sources
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Generation mode: execute or compose
    #[arg(short, long)]
    pub mode: Option<GenerationMode>,

    /// Generated Prisma client directory
    #[arg(long)]
    pub client_dir: Option<PathBuf>,

    /// @prisma/client package directory
    #[arg(long)]
    pub package_dir: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let config = self.resolve_config();
        let ctx = compile(&config.generator.input)?;
        print_diagnostics(&ctx);

        let generator = Generator::from_context(ctx, config.generator.mode);
        let layout = OutputLayout::from(&config.output);

        if self.dry_run {
            self.run_preview(&generator, &layout)
        } else {
            self.run_generation(&generator, &layout)
        }
    }

    /// Configuration file values with command line overrides applied.
    fn resolve_config(&self) -> Config {
        let mut config = load_config(self.config.as_deref()).into_config();

        if let Some(input) = &self.input {
            config.generator.input = input.clone();
        }
        if let Some(mode) = self.mode {
            config.generator.mode = mode;
        }
        if let Some(client_dir) = &self.client_dir {
            config.output.client = client_dir.clone();
        }
        if let Some(package_dir) = &self.package_dir {
            config.output.package = package_dir.clone();
        }
        config
    }

    fn run_generation(&self, generator: &Generator, layout: &OutputLayout) -> Result<()> {
        let result = generator.generate(layout)?;

        println!(
            "{} procedure{} ({} mode)",
            generator.procedures().len(),
            if generator.procedures().len() == 1 { "" } else { "s" },
            generator.mode()
        );
        for procedure in generator.procedures() {
            println!("  {}", procedure.name());
        }
        println!();

        Self::print_summary(&result);
        Ok(())
    }

    fn print_summary(result: &GenerateResult) {
        println!("Generated: {} file(s)", result.file_count());
        for path in &result.written {
            println!("  + {}", path.display());
        }
        if !result.unchanged.is_empty() {
            println!("  ({} unchanged)", result.unchanged.len());
        }

        if !result.registered.is_empty() {
            println!();
            println!("Registered exports:");
            for path in &result.registered {
                println!("  {}", path.display());
            }
        }

        if !result.skipped.is_empty() {
            println!();
            println!("Skipped package manifests:");
            for path in &result.skipped {
                println!("  - {}", path.display());
            }
        }
    }

    fn run_preview(&self, generator: &Generator, layout: &OutputLayout) -> Result<()> {
        let files = generator.preview(layout);

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());
        println!(
            "exports '{}' would be registered in existing package.json files",
            layout.export_path
        );

        Ok(())
    }
}
