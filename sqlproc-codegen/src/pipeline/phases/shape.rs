//! Shape phase - derives argument shapes.

use eyre::Result;

use crate::{
    Procedure,
    pipeline::{CompilationContext, Phase},
};

/// Phase that pairs every parsed source with its argument shape.
pub struct ShapePhase;

impl Phase for ShapePhase {
    fn name(&self) -> &'static str {
        "shape"
    }

    fn description(&self) -> &'static str {
        "Derive dense argument shapes from parameter declarations"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.procedures = std::mem::take(&mut ctx.sources)
            .into_iter()
            .map(Procedure::new)
            .collect();
        Ok(())
    }
}
