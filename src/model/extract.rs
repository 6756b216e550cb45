//! Serde-backed property extraction.
//!
//! Any `Serialize` struct becomes a [`Record`]: the type name comes from the
//! Rust type, the properties from its serialized fields in declaration order.

use serde::Serialize;
use serde_json::Value as Json;

use super::{PropertyList, Record, Value};
use crate::{Error, Result};

impl Record {
    /// Extract a record from a serializable value.
    ///
    /// ```rust
    /// use cypher_compose::{Entity, Record};
    ///
    /// #[derive(serde::Serialize)]
    /// struct Person { name: String, age: u32 }
    ///
    /// let rec = Record::from_serialize(&Person { name: "Fred".into(), age: 17 }).unwrap();
    /// assert_eq!(rec.type_name(), "Person");
    /// assert_eq!(rec.properties.len(), 2);
    /// ```
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let type_name = short_type_name(std::any::type_name::<T>());
        let fields = match serde_json::to_value(value)? {
            Json::Object(fields) => fields,
            other => {
                return Err(Error::NotAnObject {
                    type_name: type_name.to_owned(),
                    found: json_kind(&other),
                });
            }
        };

        let properties: PropertyList = fields
            .into_iter()
            .map(|(name, field)| (name, json_to_value(field)))
            .collect();

        tracing::trace!(type_name, fields = properties.len(), "extracted record");
        Ok(Record::new(type_name).with_properties(properties))
    }
}

/// `alloc::vec::Vec<my::Thing>` → `Vec`, `my::Person` → `Person`.
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

fn json_kind(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

fn json_to_value(json: Json) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(b),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else if let Some(u) = n.as_u64() {
                Value::UInt(u)
            } else {
                n.as_f64().map(Value::Float).unwrap_or_else(|| Value::display(n))
            }
        }
        Json::String(s) => Value::String(s),
        // nested structures go through the fallback path
        nested @ (Json::Array(_) | Json::Object(_)) => Value::display(nested),
    }
}
