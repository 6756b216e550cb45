//! Relationship declarations.
//!
//! A relationship is declared in two steps, and the first step fixes the
//! direction:
//!
//! ```text
//! endpoint("fred").rightward(&knows).to("george")    (fred)-[:KNOWS]->(george)
//! endpoint("fred").leftward(&likes).from("george")   (fred)<-[:LIKES]-(george)
//! ```
//!
//! The half-built [`Rightward`] and [`Leftward`] values cannot be rendered
//! and only accept their own completion step, so `rightward(..).from(..)` or
//! passing a half-built value to a clause does not compile.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ident::escape_identifier;
use super::properties::render_properties;
use crate::model::{Entity, PropertyList};

/// Which way the arrow points, read left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelDirection {
    /// `(left)-[..]->(right)`
    Rightward,
    /// `(left)<-[..]-(right)`
    Leftward,
}

/// Relationship type and properties, taken from the payload entity.
#[derive(Debug, Clone, PartialEq)]
struct Payload {
    rel_type: String,
    properties: PropertyList,
}

impl Payload {
    fn extract<E: Entity + ?Sized>(entity: &E) -> Self {
        Self {
            rel_type: entity.type_name().into_owned(),
            properties: entity.properties(),
        }
    }
}

/// First node of a relationship, before a direction is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

/// Name the first node of a relationship.
pub fn endpoint(name: impl Into<String>) -> Endpoint {
    Endpoint(name.into())
}

impl Endpoint {
    /// Begin `(self)-[payload]->(..)`.
    pub fn rightward<E: Entity + ?Sized>(self, payload: &E) -> Rightward {
        Rightward { left: self.0, payload: Payload::extract(payload) }
    }

    /// Begin `(self)<-[payload]-(..)`.
    pub fn leftward<E: Entity + ?Sized>(self, payload: &E) -> Leftward {
        Leftward { left: self.0, payload: Payload::extract(payload) }
    }
}

/// Half-built rightward relationship awaiting its target.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a half-built relationship does nothing until completed with `to`"]
pub struct Rightward {
    left: String,
    payload: Payload,
}

impl Rightward {
    pub fn to(self, right: impl Into<String>) -> RelationshipDeclaration {
        RelationshipDeclaration {
            direction: RelDirection::Rightward,
            left: self.left,
            right: right.into(),
            payload: self.payload,
        }
    }
}

/// Half-built leftward relationship awaiting its source.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a half-built relationship does nothing until completed with `from`"]
pub struct Leftward {
    left: String,
    payload: Payload,
}

impl Leftward {
    /// The node acting on the first endpoint.
    pub fn from(self, right: impl Into<String>) -> RelationshipDeclaration {
        RelationshipDeclaration {
            direction: RelDirection::Leftward,
            left: self.left,
            right: right.into(),
            payload: self.payload,
        }
    }
}

/// A complete relationship pattern, ready for `relate` / `relate_unique`.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipDeclaration {
    direction: RelDirection,
    left: String,
    right: String,
    payload: Payload,
}

impl RelationshipDeclaration {
    pub fn direction(&self) -> RelDirection { self.direction }
    pub fn left(&self) -> &str { &self.left }
    pub fn right(&self) -> &str { &self.right }
    pub fn rel_type(&self) -> &str { &self.payload.rel_type }
    pub fn properties(&self) -> &PropertyList { &self.payload.properties }

    /// Node the arrow starts from.
    pub fn source(&self) -> &str {
        match self.direction {
            RelDirection::Rightward => &self.left,
            RelDirection::Leftward => &self.right,
        }
    }

    /// Node the arrow points at.
    pub fn target(&self) -> &str {
        match self.direction {
            RelDirection::Rightward => &self.right,
            RelDirection::Leftward => &self.left,
        }
    }
}

/// The pattern text, e.g. `(fred)-[:KNOWS { since: 2001 }]->(george)`.
impl fmt::Display for RelationshipDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match self.direction {
            RelDirection::Rightward => ("-", "->"),
            RelDirection::Leftward => ("<-", "-"),
        };
        write!(
            f,
            "({}){}[:{}{}]{}({})",
            escape_identifier(&self.left),
            open,
            escape_identifier(&self.payload.rel_type),
            render_properties(&self.payload.properties),
            close,
            escape_identifier(&self.right),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn test_rightward() {
        let decl = endpoint("fred").rightward(&Record::new("KNOWS")).to("george");
        assert_eq!(decl.direction(), RelDirection::Rightward);
        assert_eq!(decl.source(), "fred");
        assert_eq!(decl.target(), "george");
        assert_eq!(decl.to_string(), "(fred)-[:KNOWS]->(george)");
    }

    #[test]
    fn test_leftward_points_into_first_endpoint() {
        let decl = endpoint("fred").leftward(&Record::new("LIKES")).from("george");
        assert_eq!(decl.direction(), RelDirection::Leftward);
        assert_eq!(decl.left(), "fred");
        assert_eq!(decl.right(), "george");
        assert_eq!(decl.source(), "george");
        assert_eq!(decl.target(), "fred");
        assert_eq!(decl.to_string(), "(fred)<-[:LIKES]-(george)");
    }

    #[test]
    fn test_properties_and_escaping() {
        let since = Record::new("KNOWS SINCE").with("year", 2001);
        let decl = endpoint("first-node").rightward(&since).to("b");
        assert_eq!(decl.rel_type(), "KNOWS SINCE");
        assert_eq!(decl.to_string(), "(`first-node`)-[:`KNOWS SINCE` { year: 2001 }]->(b)");
    }
}
