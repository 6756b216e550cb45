//! # Query Data Model
//!
//! Plain data handed to the Cypher generators: literal values, ordered
//! property lists, and the entity contract that produces them.
//!
//! Design rule: no text generation here beyond `Display` delegation.
//! This module is pure data. No I/O, no state.

pub mod value;
pub mod property_list;
pub mod entity;
pub mod extract;

pub use value::Value;
pub use property_list::PropertyList;
pub use entity::{Entity, Record};
