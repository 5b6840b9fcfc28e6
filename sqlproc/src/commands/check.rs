use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sqlproc_codegen_prisma::files::parameter_list;

use super::{compile, load_config, print_diagnostics};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to sqlproc.toml (defaults to ./sqlproc.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the *.sql procedure sources
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = load_config(self.config.as_deref()).into_config();
        let input = self.input.as_ref().unwrap_or(&config.generator.input);

        let ctx = compile(input)?;
        print_diagnostics(&ctx);

        if ctx.has_errors() {
            std::process::exit(1);
        }
        if ctx.has_warnings() {
            println!();
        }

        let count = ctx.procedures.len();
        println!(
            "✓ {} procedure{} in {}\n",
            count,
            if count == 1 { "" } else { "s" },
            input.display()
        );
        for procedure in &ctx.procedures {
            println!(
                "    {}({})",
                procedure.name(),
                parameter_list(&procedure.shape)
            );
        }

        Ok(())
    }
}
