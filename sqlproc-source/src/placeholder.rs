//! Rewriting of body placeholders into template-literal substitutions.
//!
//! Three placeholder forms are recognised:
//!
//! - `$n` refers to the function argument `$n`
//! - `?` takes the declaration index `k` (0-based, in header order) of the
//!   first declaration that carries an alias and refers to argument `$<k+1>`
//! - `:name` refers to the parameter whose alias is `name`
//!
//! Positional forms become `${$n}` (the generated function's positional
//! argument) and named forms become `${$name}` (the local bound by the
//! generated initializer). `?` therefore hits the aliased parameter only when
//! the header declares positions in ascending order starting at `$1`.

use std::sync::LazyLock;

use regex::Regex;

use crate::{Parameters, Result, SourceContext};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$([0-9]+)|\?|:([A-Za-z0-9_]+)").expect("placeholder pattern is valid")
});

#[derive(Debug)]
enum Placeholder<'a> {
    /// `$n`: zero-based index, `None` when the digits do not name a position
    Positional { index: Option<usize>, digits: &'a str },
    /// `?`: declaration index of the first aliased parameter
    Bare { index: Option<usize> },
    Named(&'a str),
}

#[derive(Debug)]
struct Occurrence<'a> {
    start: usize,
    end: usize,
    placeholder: Placeholder<'a>,
}

/// Resolve every placeholder in `body` against `params`.
///
/// Positional placeholders are validated before named ones, so a source with
/// both kinds of mistake reports the positional one. The result is wrapped in
/// backticks with the first backtick of the body escaped.
pub(crate) fn resolve(
    ctx: &SourceContext<'_>,
    params: &Parameters,
    body: &str,
    body_offset: usize,
) -> Result<String> {
    let occurrences = scan(params, body);

    for occurrence in &occurrences {
        let unresolved = match occurrence.placeholder {
            Placeholder::Positional { index, digits } => {
                (!in_range(index, params)).then(|| (digits.to_string(), false))
            }
            Placeholder::Bare { index } => {
                (!in_range(index, params)).then(|| (index.map_or(0, |i| i + 1).to_string(), true))
            }
            Placeholder::Named(_) => None,
        };

        if let Some((position, bare)) = unresolved {
            let span = (body_offset + occurrence.start, occurrence.end - occurrence.start);
            return Err(ctx.unresolved_positional(&position, span, bare));
        }
    }

    for occurrence in &occurrences {
        if let Placeholder::Named(name) = occurrence.placeholder
            && !params.values().any(|p| p.alias.as_deref() == Some(name))
        {
            let span = (body_offset + occurrence.start, occurrence.end - occurrence.start);
            return Err(ctx.unresolved_named(name, span));
        }
    }

    let mut code = String::with_capacity(body.len() + 2);
    let mut last = 0;
    for occurrence in &occurrences {
        code.push_str(&body[last..occurrence.start]);
        match occurrence.placeholder {
            Placeholder::Positional {
                index: Some(index), ..
            }
            | Placeholder::Bare { index: Some(index) } => {
                code.push_str(&format!("${{${}}}", index + 1))
            }
            Placeholder::Named(name) => code.push_str(&format!("${{${name}}}")),
            // rejected by the range check above
            Placeholder::Positional { index: None, .. } | Placeholder::Bare { index: None } => {}
        }
        last = occurrence.end;
    }
    code.push_str(&body[last..]);

    Ok(format!("`{}`", code.replacen('`', "\\`", 1)))
}

fn in_range(index: Option<usize>, params: &Parameters) -> bool {
    index.is_some_and(|index| index < params.len())
}

fn scan<'a>(params: &Parameters, body: &'a str) -> Vec<Occurrence<'a>> {
    let first_aliased = params.values().position(|p| p.alias.is_some());

    PLACEHOLDER
        .captures_iter(body)
        .map(|captures| {
            let whole = captures.get(0).expect("capture group 0 always matches");
            let placeholder = if let Some(digits) = captures.get(1) {
                Placeholder::Positional {
                    index: digits
                        .as_str()
                        .parse::<usize>()
                        .ok()
                        .and_then(|n| n.checked_sub(1)),
                    digits: digits.as_str(),
                }
            } else if let Some(name) = captures.get(2) {
                Placeholder::Named(name.as_str())
            } else {
                Placeholder::Bare {
                    index: first_aliased,
                }
            };

            Occurrence {
                start: whole.start(),
                end: whole.end(),
                placeholder,
            }
        })
        .collect()
}
