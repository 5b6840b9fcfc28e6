//! The closed set of parameter types a SQL header may declare.

use std::{fmt, str::FromStr};

/// Primitive kind of a declared SQL parameter.
///
/// This is a language-agnostic tag; target crates map it to concrete
/// type expressions through a `TypeMapper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamType {
    Int,
    BigInt,
    Float,
    Boolean,
    String,
    DateTime,
    Decimal,
    Json,
    Bytes,
}

impl ParamType {
    /// Every accepted type, in documentation order.
    pub const ALL: [ParamType; 9] = [
        ParamType::Int,
        ParamType::BigInt,
        ParamType::Float,
        ParamType::Boolean,
        ParamType::String,
        ParamType::DateTime,
        ParamType::Json,
        ParamType::Bytes,
        ParamType::Decimal,
    ];

    /// The tag as written inside `{...}` in a header comment.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::Int => "Int",
            ParamType::BigInt => "BigInt",
            ParamType::Float => "Float",
            ParamType::Boolean => "Boolean",
            ParamType::String => "String",
            ParamType::DateTime => "DateTime",
            ParamType::Decimal => "Decimal",
            ParamType::Json => "Json",
            ParamType::Bytes => "Bytes",
        }
    }

    /// Comma-separated list of accepted tags, for help messages.
    pub fn expected() -> String {
        Self::ALL
            .iter()
            .map(ParamType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type tag outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownParamType(pub String);

impl fmt::Display for UnknownParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown parameter type '{}'", self.0)
    }
}

impl std::error::Error for UnknownParamType {}

impl FromStr for ParamType {
    type Err = UnknownParamType;

    /// Tags are case-sensitive, matching the header syntax exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UnknownParamType(s.to_string()))
    }
}
