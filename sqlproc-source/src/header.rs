//! Parsing of the `-- @param` comment block at the top of a SQL file.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use sqlproc_core::{ParamType, invalid_reason};

use crate::{ParameterDeclaration, Parameters, Position, Result, SourceContext};

/// `-- @param {Type} $n[:alias][?][ description]`, matched against a trimmed line.
static PARAM_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^--\s*@param\s*\{([A-Za-z0-9_]+)\}\s*(\$[0-9]+)(?::([A-Za-z0-9_]+))?(\?)?\s*(.*)$",
    )
    .expect("param line pattern is valid")
});

/// Declarations found in a header plus the SQL that follows it.
#[derive(Debug)]
pub(crate) struct Header<'a> {
    pub params: Parameters,
    pub duplicates: Vec<Position>,
    /// Trimmed SQL body
    pub body: &'a str,
    /// Byte offset of `body` within the source
    pub body_offset: usize,
}

/// Scan the leading comment block of a source.
///
/// Blank lines are skipped. The first line that is not a comment, or a
/// comment that is not a parameter declaration, starts the body.
pub(crate) fn parse_header<'a>(ctx: &SourceContext<'a>) -> Result<Header<'a>> {
    let src = ctx.src();
    let mut params = Parameters::new();
    let mut duplicates = Vec::new();
    let mut body_start = src.len();
    let mut next_line = 0;

    for line in src.split('\n') {
        let line_start = next_line;
        next_line += line.len() + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let captures = if trimmed.starts_with("--") {
            PARAM_LINE.captures(trimmed)
        } else {
            None
        };
        let Some(captures) = captures else {
            body_start = line_start;
            break;
        };

        let trimmed_start = line_start + (line.len() - line.trim_start().len());
        let declaration = parse_declaration(ctx, &captures, trimmed_start)?;
        let position = declaration.position;

        if params.insert(position, declaration).is_some() && !duplicates.contains(&position) {
            duplicates.push(position);
        }
    }

    let rest = &src[body_start..];
    Ok(Header {
        params,
        duplicates,
        body: rest.trim(),
        body_offset: body_start + (rest.len() - rest.trim_start().len()),
    })
}

fn parse_declaration(
    ctx: &SourceContext<'_>,
    captures: &Captures<'_>,
    line_offset: usize,
) -> Result<ParameterDeclaration> {
    let span_of = |index: usize| {
        captures
            .get(index)
            .map(|m| (line_offset + m.start(), m.len()))
            .unwrap_or((line_offset, 0))
    };

    let ty_tag = &captures[1];
    let ty: ParamType = ty_tag
        .parse()
        .map_err(|_| ctx.unknown_type(ty_tag, span_of(1)))?;

    let key = &captures[2];
    let position: Position = key
        .parse()
        .map_err(|_| ctx.invalid_position(key, span_of(2)))?;

    let alias = match captures.get(3) {
        Some(m) => {
            if let Some(reason) = invalid_reason(m.as_str()) {
                return Err(ctx.invalid_alias(m.as_str(), reason, span_of(3)));
            }
            Some(m.as_str().to_string())
        }
        None => None,
    };

    let description = captures
        .get(5)
        .map(|m| m.as_str().trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string);

    Ok(ParameterDeclaration {
        position,
        ty,
        alias,
        optional: captures.get(4).is_some(),
        description,
    })
}
