//! Property block rendering: ` { name: literal, ... }`.

use super::ident::escape_identifier;
use super::literal::encode;
use crate::model::PropertyList;

/// Render a property list as a Cypher property block.
///
/// An empty list renders as nothing at all (no braces). A non-empty list
/// renders with a leading space so it can be appended directly after a
/// label or relationship type.
pub fn render_properties(props: &PropertyList) -> String {
    if props.is_empty() {
        return String::new();
    }

    let pairs: Vec<String> = props
        .iter()
        .map(|(name, value)| format!("{}: {}", escape_identifier(name), encode(value)))
        .collect();
    format!(" {{ {} }}", pairs.join(", "))
}
