//! Validation of procedure names against JavaScript identifier rules.

/// Words that cannot name a generated procedure.
///
/// Covers the JavaScript reserved words plus the contextual keywords that
/// break module syntax when used as bare export names.
pub const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with", "yield",
    // Strict mode and contextual keywords
    "let", "static", "implements", "interface", "package", "private", "protected", "public",
    "await", "as", "async", "from", "get", "of", "set",
];

/// Check if a name is a reserved word.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Check if `name` can be used as a generated function name.
pub fn is_valid_identifier(name: &str) -> bool {
    invalid_reason(name).is_none()
}

/// Explain why `name` is not a valid function name.
///
/// Returns `None` if the name is valid.
pub fn invalid_reason(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some('$') => return Some("name cannot contain '$'"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    for c in chars {
        if c == '$' {
            return Some("name cannot contain '$'");
        }
        if !(c.is_ascii_alphanumeric() || c == '_') {
            return Some("name must contain only letters, numbers, and underscores");
        }
    }

    if is_reserved_word(name) {
        return Some("name is a JavaScript reserved word");
    }

    None
}
