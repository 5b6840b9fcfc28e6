//! Parameter model of a parsed SQL source.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use sqlproc_core::ParamType;

use crate::{Result, SourceContext, header, placeholder};

/// A 1-based positional parameter key, written `$n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(u32);

impl Position {
    /// Highest accepted key, the PostgreSQL bind-parameter limit.
    pub const MAX: u32 = 65_535;

    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// The numeric value of the key (`$3` -> 3).
    pub fn get(self) -> u32 {
        self.0
    }

    /// The key as written in SQL and used as the generated argument name.
    pub fn key(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.strip_prefix('$')
            .and_then(|digits| digits.parse::<u32>().ok())
            .filter(|n| (1..=Self::MAX).contains(n))
            .map(Position)
            .ok_or_else(|| format!("invalid positional key '{s}'"))
    }
}

/// One `-- @param` line of a source header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDeclaration {
    pub position: Position,
    pub ty: ParamType,
    /// Name used by `:alias` references and as the generated argument name
    pub alias: Option<String>,
    /// Whether the generated type also accepts `null`
    pub optional: bool,
    /// Free text used for generated documentation
    pub description: Option<String>,
}

impl ParameterDeclaration {
    pub fn new(position: Position, ty: ParamType) -> Self {
        Self {
            position,
            ty,
            alias: None,
            optional: false,
            description: None,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The name exposed to callers: the alias, or the positional key.
    pub fn exposed_name(&self) -> String {
        self.alias.clone().unwrap_or_else(|| self.position.key())
    }
}

/// Declarations keyed by position, in the order they were first declared.
pub type Parameters = IndexMap<Position, ParameterDeclaration>;

/// A fully parsed and resolved SQL source.
#[derive(Debug, Clone)]
pub struct ParsedSource {
    /// Logical procedure name (file stem)
    pub name: String,
    /// File name used in diagnostics
    pub filename: String,
    pub params: Parameters,
    /// Positions declared more than once; the last declaration won
    pub duplicates: Vec<Position>,
    /// Body with canonical substitutions, wrapped as a template literal
    pub code: String,
    /// Whether the source had any SQL after its header
    pub has_body: bool,
}

impl ParsedSource {
    /// Parse the header of `content` and resolve the placeholders in its body.
    pub fn parse(name: impl Into<String>, filename: &str, content: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let header = header::parse_header(&ctx)?;
        let code = placeholder::resolve(&ctx, &header.params, &header.body, header.body_offset)?;

        Ok(Self {
            name: name.into(),
            filename: filename.to_string(),
            has_body: !header.body.is_empty(),
            params: header.params,
            duplicates: header.duplicates,
            code,
        })
    }

    /// The highest declared position, or zero when nothing is declared.
    pub fn max_position(&self) -> u32 {
        self.params.keys().map(|p| p.get()).max().unwrap_or(0)
    }
}
