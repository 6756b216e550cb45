//! Literal encoding: typed values to Cypher literal text.
//!
//! Encoding is total. Every [`Value`] has a literal form, and anything
//! without a dedicated variant is quoted from its display text.

use std::borrow::Cow;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::SecondsFormat;

use crate::model::Value;

/// Encode a value as Cypher literal text.
///
/// ```rust
/// use cypher_compose::{Value, cypher::literal::encode};
///
/// assert_eq!(encode(&Value::Bool(true)), "true");
/// assert_eq!(encode(&Value::Int(17)), "17");
/// assert_eq!(encode(&Value::from("it's")), r#""it\'s""#);
/// ```
pub fn encode(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => if *b { "true" } else { "false" }.to_string(),
        Value::Int(i) => i.to_string(),
        // Raw digits; values above i64::MAX exceed Cypher's integer range.
        Value::UInt(u) => u.to_string(),
        // Debug form keeps `.0` and switches to an exponent for large
        // magnitudes. NaN and infinities are not valid Cypher literals.
        Value::Float(f) => format!("{f:?}"),
        Value::Decimal(d) => d.to_string(),
        // Quoted: the target's integer range is not assumed.
        Value::BigInt(i) => quote(&i.to_string()),
        Value::String(s) => quote(s),
        Value::Char(c) => quote(c.encode_utf8(&mut [0; 4])),
        Value::Timestamp(ts) => quote(&ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)),
        Value::LocalTimestamp(ts) => quote(&ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
        Value::Bytes(bytes) => quote(&BASE64.encode(bytes)),
        Value::Uuid(id) => quote(&id.hyphenated().to_string()),
        Value::Other(text) => quote(text),
    }
}

#[inline]
fn needs_escaping(s: &str) -> bool {
    s.chars()
        .any(|c| matches!(c, '\t' | '\x08' | '\r' | '\n' | '\x0C' | '\'' | '"' | '\\'))
}

/// Apply the string escape table.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
/// Non-ASCII characters always pass through untouched.
pub fn escape_string(s: &str) -> Cow<'_, str> {
    if !needs_escaping(s) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\t' => escaped.push_str("\\t"),
            '\x08' => escaped.push_str("\\b"),
            '\r' => escaped.push_str("\\r"),
            '\n' => escaped.push_str("\\n"),
            '\x0C' => escaped.push_str("\\f"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Escape and wrap in double quotes.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", escape_string(s))
}
