//! The property-extractor contract.
//!
//! Clause operations never look inside a caller's types. They ask an
//! [`Entity`] for a type name and an ordered [`PropertyList`], and render
//! whatever comes back.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::{PropertyList, Value};

/// Something that can be written as a node or relationship.
pub trait Entity {
    /// Label for nodes, relationship type for relationships.
    fn type_name(&self) -> Cow<'_, str>;

    /// Externally visible fields, in a stable order.
    fn properties(&self) -> PropertyList;
}

impl<T: Entity + ?Sized> Entity for &T {
    fn type_name(&self) -> Cow<'_, str> {
        (**self).type_name()
    }

    fn properties(&self) -> PropertyList {
        (**self).properties()
    }
}

/// A hand-built entity: a type name plus properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub type_name: String,
    pub properties: PropertyList,
}

impl Record {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            properties: PropertyList::new(),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.push(name, value);
        self
    }

    pub fn with_properties(mut self, properties: PropertyList) -> Self {
        self.properties = properties;
        self
    }
}

impl Entity for Record {
    fn type_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.type_name)
    }

    fn properties(&self) -> PropertyList {
        self.properties.clone()
    }
}
