use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use sqlproc_core::ParamType;
use thiserror::Error;

/// Result type for source parsing (boxed to keep the `Ok` path small)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// A SQL source file being parsed, used to attach spans to errors.
#[derive(Debug, Clone)]
pub struct SourceContext<'a> {
    src: &'a str,
    filename: &'a str,
}

impl<'a> SourceContext<'a> {
    pub fn new(src: &'a str, filename: &'a str) -> Self {
        Self { src, filename }
    }

    pub fn src(&self) -> &'a str {
        self.src
    }

    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.filename, self.src.to_string())
    }

    pub fn unknown_type(&self, ty: &str, span: impl Into<SourceSpan>) -> Box<Error> {
        Box::new(Error::UnknownType {
            src: self.named_source(),
            span: span.into(),
            ty: ty.to_string(),
            expected: ParamType::expected(),
        })
    }

    pub fn invalid_position(&self, key: &str, span: impl Into<SourceSpan>) -> Box<Error> {
        Box::new(Error::InvalidPosition {
            src: self.named_source(),
            span: span.into(),
            key: key.to_string(),
        })
    }

    pub fn invalid_alias(
        &self,
        alias: &str,
        reason: &'static str,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidAlias {
            src: self.named_source(),
            span: span.into(),
            alias: alias.to_string(),
            reason,
        })
    }

    /// `position` is the 1-based index as written in the body.
    pub fn unresolved_positional(
        &self,
        position: &str,
        span: impl Into<SourceSpan>,
        bare: bool,
    ) -> Box<Error> {
        let help = if bare {
            "`?` binds to the first parameter declared with an alias".to_string()
        } else {
            format!("declare it in the header, e.g. `-- @param {{String}} ${position}`")
        };
        Box::new(Error::UnresolvedPositional {
            src: self.named_source(),
            span: span.into(),
            position: position.to_string(),
            help,
        })
    }

    pub fn unresolved_named(&self, name: &str, span: impl Into<SourceSpan>) -> Box<Error> {
        Box::new(Error::UnresolvedNamed {
            src: self.named_source(),
            span: span.into(),
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(sqlproc::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "invalid procedure name(s), expected valid JavaScript identifier(s): {}",
        .names.join(", ")
    )]
    #[diagnostic(code(sqlproc::invalid_identifier))]
    InvalidIdentifiers {
        names: Vec<String>,
        #[help]
        reasons: String,
    },

    #[error("invalid type '{ty}' in SQL comment")]
    #[diagnostic(code(sqlproc::unknown_type), help("valid types are: {expected}"))]
    UnknownType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: SourceSpan,
        ty: String,
        expected: String,
    },

    #[error("invalid parameter position '{key}'")]
    #[diagnostic(
        code(sqlproc::invalid_position),
        help("positions start at $1 and go up to $65535")
    )]
    InvalidPosition {
        #[source_code]
        src: NamedSource<String>,
        #[label("position out of range")]
        span: SourceSpan,
        key: String,
    },

    #[error("invalid parameter alias '{alias}': {reason}")]
    #[diagnostic(
        code(sqlproc::invalid_alias),
        help("aliases become JavaScript bindings and argument names")
    )]
    InvalidAlias {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a usable name")]
        span: SourceSpan,
        alias: String,
        reason: &'static str,
    },

    #[error("unknown positional parameter: ${position}")]
    #[diagnostic(code(sqlproc::unknown_positional))]
    UnresolvedPositional {
        #[source_code]
        src: NamedSource<String>,
        #[label("not declared in the header")]
        span: SourceSpan,
        position: String,
        #[help]
        help: String,
    },

    #[error("unknown named parameter: :{name}")]
    #[diagnostic(
        code(sqlproc::unknown_named),
        help("add an alias in the header, e.g. `-- @param {{String}} $1:{name}`")
    )]
    UnresolvedNamed {
        #[source_code]
        src: NamedSource<String>,
        #[label("no parameter has this alias")]
        span: SourceSpan,
        name: String,
    },
}

impl Error {
    /// Build the batch error for rejected procedure names.
    ///
    /// `invalid` pairs each offending file name with the reason it was rejected.
    pub fn invalid_identifiers(invalid: Vec<(String, &'static str)>) -> Box<Self> {
        let reasons = invalid
            .iter()
            .map(|(name, reason)| format!("{name}: {reason}"))
            .collect::<Vec<_>>()
            .join("\n");
        Box::new(Error::InvalidIdentifiers {
            names: invalid.into_iter().map(|(name, _)| name).collect(),
            reasons,
        })
    }
}
