//! Identifier escaping for variables, labels and relationship types.

use std::borrow::Cow;

/// Check if a string is a bare Cypher identifier.
///
/// Bare identifiers start with an ASCII letter and continue with ASCII
/// letters, digits, or underscores.
pub fn is_bare_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Escape an identifier using backticks if needed.
///
/// Bare identifiers come back unchanged. Anything else is wrapped in
/// backticks with embedded backticks doubled, so the result always parses
/// back to exactly `s`.
///
/// ```rust
/// use cypher_compose::cypher::ident::escape_identifier;
///
/// assert_eq!(escape_identifier("fred"), "fred");
/// assert_eq!(escape_identifier("a-b"), "`a-b`");
/// assert_eq!(escape_identifier("a`b"), "`a``b`");
/// assert_eq!(escape_identifier(""), "``");
/// ```
pub fn escape_identifier(s: &str) -> Cow<'_, str> {
    if is_bare_identifier(s) {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(format!("`{}`", s.replace('`', "``")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_identifiers() {
        for name in ["a", "Person", "fred_1", "KNOWS", "x9_"] {
            assert!(is_bare_identifier(name), "{name}");
            assert_eq!(escape_identifier(name), name);
        }
    }

    #[test]
    fn test_escaped_identifiers() {
        assert_eq!(escape_identifier("a-b"), "`a-b`");
        assert_eq!(escape_identifier("123"), "`123`");
        assert_eq!(escape_identifier(""), "``");
        assert_eq!(escape_identifier("a`b"), "`a``b`");
        assert_eq!(escape_identifier("_private"), "`_private`");
        assert_eq!(escape_identifier("has space"), "`has space`");
        assert_eq!(escape_identifier("café"), "`café`");
    }

    #[test]
    fn test_bare_name_is_not_allocated() {
        assert!(matches!(escape_identifier("fred"), Cow::Borrowed(_)));
    }
}
