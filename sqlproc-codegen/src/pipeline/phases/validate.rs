//! Validate phase - checks procedure names.

use eyre::Result;
use sqlproc_core::invalid_reason;
use sqlproc_source::Error;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that rejects the whole batch when any procedure name is unusable.
///
/// Every invalid name is reported at once, before any source is parsed.
pub struct ValidatePhase;

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check that every procedure name is a valid identifier"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let invalid: Vec<_> = ctx
            .inputs
            .iter()
            .filter_map(|input| invalid_reason(&input.name).map(|r| (input.name.clone(), r)))
            .collect();

        if invalid.is_empty() {
            return Ok(());
        }

        Err(eyre::Report::new(*Error::invalid_identifiers(invalid)))
    }
}
