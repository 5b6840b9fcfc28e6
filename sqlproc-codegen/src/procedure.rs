use sqlproc_source::ParsedSource;

use crate::ArgumentShape;

/// A parsed source together with its argument shape, ready to be rendered.
#[derive(Debug, Clone)]
pub struct Procedure {
    pub source: ParsedSource,
    pub shape: ArgumentShape,
}

impl Procedure {
    pub fn new(source: ParsedSource) -> Self {
        let shape = ArgumentShape::from_params(&source.params);
        Self { source, shape }
    }

    pub fn name(&self) -> &str {
        &self.source.name
    }

    /// Annotated body as a template literal.
    pub fn code(&self) -> &str {
        &self.source.code
    }
}
