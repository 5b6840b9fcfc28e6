//! Parse phase - turns raw inputs into parsed sources.

use eyre::Result;
use sqlproc_source::ParsedSource;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that parses every input; the first failing source aborts the run.
pub struct ParsePhase;

impl Phase for ParsePhase {
    fn name(&self) -> &'static str {
        "parse"
    }

    fn description(&self) -> &'static str {
        "Parse parameter headers and resolve body placeholders"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut sources = Vec::with_capacity(ctx.inputs.len());

        for input in &ctx.inputs {
            let source = ParsedSource::parse(&input.name, &input.filename, &input.content)
                .map_err(|e| eyre::Report::new(*e))?;

            tracing::debug!(
                procedure = %source.name,
                params = source.params.len(),
                "parsed procedure source"
            );
            sources.push(source);
        }

        ctx.sources = sources;
        Ok(())
    }
}
