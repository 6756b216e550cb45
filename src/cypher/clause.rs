//! Clause operations.
//!
//! Each operation renders its clause text immediately (entities are read at
//! call time) and returns `self.then(line)`, so a chain of calls reads in the
//! same order as the query it produces.

use super::expr::Expr;
use super::ident::escape_identifier;
use super::properties::render_properties;
use super::relationship::RelationshipDeclaration;
use crate::model::Entity;

/// Emitted by [`Expr::where_`] in place of a translated predicate.
pub const WHERE_PLACEHOLDER: &str = "WHERE true /* predicate translation unsupported */";

fn node_pattern(name: &str, label: &str, props: &str) -> String {
    format!("({}:{}{})", escape_identifier(name), escape_identifier(label), props)
}

impl Expr {
    fn clause(self, keyword: &'static str, text: String) -> Expr {
        tracing::trace!(keyword, "appending clause");
        self.then(Expr::line(text))
    }

    /// Verbatim query text on its own line.
    pub fn raw(self, text: impl Into<String>) -> Expr {
        self.clause("raw", text.into())
    }

    /// `CREATE (name:Type)`
    pub fn create_empty(self, name: &str, type_name: &str) -> Expr {
        let text = format!("CREATE {}", node_pattern(name, type_name, ""));
        self.clause("CREATE", text)
    }

    /// `CREATE (name:Type { .. })` with properties from `entity` and an
    /// explicit label.
    pub fn create_type<E: Entity + ?Sized>(self, name: &str, type_name: &str, entity: &E) -> Expr {
        let props = render_properties(&entity.properties());
        let text = format!("CREATE {}", node_pattern(name, type_name, &props));
        self.clause("CREATE", text)
    }

    /// `CREATE (name:Type { .. })` with label and properties from `entity`.
    pub fn create<E: Entity + ?Sized>(self, name: &str, entity: &E) -> Expr {
        let type_name = entity.type_name();
        let props = render_properties(&entity.properties());
        let text = format!("CREATE {}", node_pattern(name, &type_name, &props));
        self.clause("CREATE", text)
    }

    /// `MATCH pattern`, pattern passed through verbatim.
    pub fn match_(self, pattern: &str) -> Expr {
        self.clause("MATCH", format!("MATCH {pattern}"))
    }

    /// `OPTIONAL MATCH pattern`, pattern passed through verbatim.
    pub fn optional_match(self, pattern: &str) -> Expr {
        self.clause("OPTIONAL MATCH", format!("OPTIONAL MATCH {pattern}"))
    }

    /// Placeholder `WHERE` clause.
    ///
    /// Predicates are not translated: whatever is passed is ignored and
    /// [`WHERE_PLACEHOLDER`] is emitted. Use [`Expr::raw`] for a real filter.
    pub fn where_<P>(self, _predicate: P) -> Expr {
        tracing::warn!("predicate translation is not supported; emitting placeholder WHERE");
        self.clause("WHERE", WHERE_PLACEHOLDER.to_string())
    }

    /// `CREATE (a)-[:TYPE]->(b)` or the leftward form.
    pub fn relate(self, decl: &RelationshipDeclaration) -> Expr {
        self.clause("CREATE", format!("CREATE {decl}"))
    }

    /// `CREATE UNIQUE (a)-[:TYPE]->(b)` or the leftward form.
    pub fn relate_unique(self, decl: &RelationshipDeclaration) -> Expr {
        self.clause("CREATE UNIQUE", format!("CREATE UNIQUE {decl}"))
    }

    /// `CREATE UNIQUE text`, text passed through verbatim.
    pub fn create_unique(self, text: &str) -> Expr {
        self.clause("CREATE UNIQUE", format!("CREATE UNIQUE {text}"))
    }
}
