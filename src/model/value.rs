//! Typed literal values that can be embedded in generated Cypher.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone};
use num_bigint::BigInt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A literal value destined for query text.
///
/// Every variant has a defined literal form (see [`crate::cypher::literal::encode`]):
/// - Numeric: Int, UInt, Decimal (raw base-10), Float (float literal), BigInt (quoted)
/// - Text: String, Char
/// - Temporal: Timestamp (with offset), LocalTimestamp (without)
/// - Other scalars: Null, Bool, Bytes (base64), Uuid
/// - Fallback: Other, the display text of anything not listed above
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    /// Emitted raw; values above `i64::MAX` exceed Cypher's integer range.
    UInt(u64),
    Float(f64),
    Decimal(Decimal),
    BigInt(BigInt),
    String(String),
    Char(char),

    // Temporal types
    Timestamp(DateTime<FixedOffset>),
    LocalTimestamp(NaiveDateTime),

    Bytes(Vec<u8>),
    Uuid(Uuid),

    /// Display text of a value with no dedicated variant.
    Other(String),
}

// ============================================================================
// Type checking
// ============================================================================

impl Value {
    /// Wrap any displayable value through the fallback path.
    pub fn display(value: impl fmt::Display) -> Self {
        Value::Other(value.to_string())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "BOOLEAN",
            Value::Int(_) => "INTEGER",
            Value::UInt(_) => "UNSIGNED_INTEGER",
            Value::Float(_) => "FLOAT",
            Value::Decimal(_) => "DECIMAL",
            Value::BigInt(_) => "BIG_INTEGER",
            Value::String(_) => "STRING",
            Value::Char(_) => "CHAR",
            Value::Timestamp(_) => "TIMESTAMP",
            Value::LocalTimestamp(_) => "LOCAL_TIMESTAMP",
            Value::Bytes(_) => "BYTES",
            Value::Uuid(_) => "UUID",
            Value::Other(_) => "OTHER",
        }
    }

    pub fn is_null(&self) -> bool { matches!(self, Value::Null) }
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Value::Int(_) | Value::UInt(_) | Value::Float(_) | Value::Decimal(_) | Value::BigInt(_)
        )
    }
    pub fn is_text(&self) -> bool { matches!(self, Value::String(_) | Value::Char(_)) }

    /// Attempt to extract as &str
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for Value { fn from(v: bool) -> Self { Value::Bool(v) } }
impl From<i8> for Value { fn from(v: i8) -> Self { Value::Int(v.into()) } }
impl From<i16> for Value { fn from(v: i16) -> Self { Value::Int(v.into()) } }
impl From<i32> for Value { fn from(v: i32) -> Self { Value::Int(v.into()) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Value::Int(v) } }
impl From<u8> for Value { fn from(v: u8) -> Self { Value::UInt(v.into()) } }
impl From<u16> for Value { fn from(v: u16) -> Self { Value::UInt(v.into()) } }
impl From<u32> for Value { fn from(v: u32) -> Self { Value::UInt(v.into()) } }
impl From<u64> for Value { fn from(v: u64) -> Self { Value::UInt(v) } }
impl From<f32> for Value { fn from(v: f32) -> Self { Value::Float(v.into()) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Value::Float(v) } }
impl From<Decimal> for Value { fn from(v: Decimal) -> Self { Value::Decimal(v) } }
impl From<BigInt> for Value { fn from(v: BigInt) -> Self { Value::BigInt(v) } }
impl From<char> for Value { fn from(v: char) -> Self { Value::Char(v) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::String(v) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Value::String(v.to_owned()) } }
impl From<Uuid> for Value { fn from(v: Uuid) -> Self { Value::Uuid(v) } }
impl From<NaiveDateTime> for Value { fn from(v: NaiveDateTime) -> Self { Value::LocalTimestamp(v) } }

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(v: DateTime<Tz>) -> Self {
        Value::Timestamp(v.fixed_offset())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::Null) }
}

// ============================================================================
// Display
// ============================================================================

/// Displays the Cypher literal form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::cypher::literal::encode(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    #[test]
    fn test_value_from() {
        assert_eq!(Value::from("hello"), Value::String("hello".into()));
        assert_eq!(Value::from(42), Value::Int(42));
        assert_eq!(Value::from(42u32), Value::UInt(42));
        assert_eq!(Value::from(2.5), Value::Float(2.5));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from('x'), Value::Char('x'));
        assert_eq!(Value::from(None::<i32>), Value::Null);
    }

    #[test]
    fn test_utc_timestamp_keeps_zero_offset() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        match Value::from(utc) {
            Value::Timestamp(ts) => assert_eq!(ts.offset().local_minus_utc(), 0),
            other => panic!("expected timestamp, got {other:?}"),
        }
    }

    #[test]
    fn test_naive_becomes_local_timestamp() {
        let naive = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(Value::from(naive).type_name(), "LOCAL_TIMESTAMP");
    }

    #[test]
    fn test_display_uses_literal_form() {
        assert_eq!(Value::from("a\"b").to_string(), r#""a\"b""#);
        assert_eq!(Value::display(std::net::Ipv4Addr::LOCALHOST).to_string(), "\"127.0.0.1\"");
    }
}
