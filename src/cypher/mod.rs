//! # Cypher Text Generation
//!
//! Literal encoding, identifier escaping, property blocks, and the
//! statement combinator that strings clauses together.
//! Pure functions with no I/O; nothing is written until render.

pub mod literal;
pub mod ident;
pub mod properties;
pub mod expr;
pub mod render;
pub mod relationship;
pub mod clause;

pub use clause::WHERE_PLACEHOLDER;
pub use expr::Expr;
pub use ident::escape_identifier;
pub use literal::encode;
pub use properties::render_properties;
pub use relationship::{
    endpoint, Endpoint, Leftward, RelDirection, RelationshipDeclaration, Rightward,
};
pub use render::{LineEnding, RenderConfig, Sink};
