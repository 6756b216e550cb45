//! # cypher-compose: Composable Cypher Query Text
//!
//! Builds Cypher query text from a fluent chain of clauses, with every
//! literal and identifier escaped on the way out.
//!
//! ## Design Principles
//!
//! 1. **Nothing runs until render**: an `Expr` is a description; `render()` is the only side effect
//! 2. **Escaping is not optional**: names go through the identifier escaper, values through the literal encoder
//! 3. **Half-built relationships don't compile**: direction is chosen in step one and completed in step two
//! 4. **Entities are opaque**: clauses only see a type name and an ordered property list
//!
//! ## Quick Start
//!
//! ```rust
//! use cypher_compose::{endpoint, Expr, Record};
//!
//! let fred = Record::new("Person").with("Name", "Fred").with("Age", 17);
//! let george = Record::new("Person").with("Name", "George");
//! let knows = endpoint("fred").rightward(&Record::new("KNOWS")).to("george");
//!
//! let query = Expr::empty()
//!     .create("fred", &fred)
//!     .create("george", &george)
//!     .relate(&knows)
//!     .render();
//!
//! assert_eq!(
//!     query,
//!     "CREATE (fred:Person { Name: \"Fred\", Age: 17 })\n\
//!      CREATE (george:Person { Name: \"George\" })\n\
//!      CREATE (fred)-[:KNOWS]->(george)"
//! );
//! ```
//!
//! The library never talks to a database; hand the rendered text to
//! whatever driver you use.

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod cypher;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{Entity, PropertyList, Record, Value};

// ============================================================================
// Re-exports: Cypher
// ============================================================================

pub use cypher::{
    endpoint, Expr, LineEnding, RelDirection, RelationshipDeclaration, RenderConfig,
};

// ============================================================================
// Error Types
// ============================================================================

/// Errors from property extraction. Text generation itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot extract properties from {type_name}: serialized as {found}, expected an object")]
    NotAnObject { type_name: String, found: &'static str },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
