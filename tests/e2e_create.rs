//! End-to-end tests for node creation clauses.
//!
//! Each test builds a chain of clauses, renders once, and checks the exact text.

use cypher_compose::{Expr, Record, Value};
use pretty_assertions::assert_eq;
use serde::Serialize;

#[derive(Serialize)]
struct Person {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Age")]
    age: u32,
}

// ============================================================================
// 1. Hand-built record
// ============================================================================

#[test]
fn test_create_person_record() {
    let fred = Record::new("Person").with("Name", "Fred").with("Age", 17);
    let query = Expr::empty().create("fred", &fred).render();
    assert_eq!(query, r#"CREATE (fred:Person { Name: "Fred", Age: 17 })"#);
}

// ============================================================================
// 2. Serde-extracted entity renders the same as the hand-built one
// ============================================================================

#[test]
fn test_create_from_serialize() {
    let fred = Person { name: "Fred".into(), age: 17 };
    let record = Record::from_serialize(&fred).unwrap();
    let query = Expr::empty().create("fred", &record).render();
    assert_eq!(query, r#"CREATE (fred:Person { Name: "Fred", Age: 17 })"#);
}

// ============================================================================
// 3. Every literal kind in one property block
// ============================================================================

#[test]
fn test_mixed_literals() {
    let thing = Record::new("Thing")
        .with("flag", false)
        .with("ratio", 0.5)
        .with("quote", "say \"hi\"\n")
        .with("raw", Value::Bytes(vec![0xff, 0x00]))
        .with("missing", Value::Null);
    let query = Expr::empty().create_type("t", "Thing", &thing).render();
    assert_eq!(
        query,
        r#"CREATE (t:Thing { flag: false, ratio: 0.5, quote: "say \"hi\"\n", raw: "/wA=", missing: null })"#
    );
}

// ============================================================================
// 4. Whole and very large floats keep their float type
// ============================================================================

#[test]
fn test_float_properties_render_as_floats() {
    let reading = Record::new("Reading").with("big", 1e21).with("whole", 3.0);
    let query = Expr::empty().create("x", &reading).render();
    assert_eq!(query, "CREATE (x:Reading { big: 1e21, whole: 3.0 })");
}

// ============================================================================
// 5. Unsafe names are backticked everywhere
// ============================================================================

#[test]
fn test_unsafe_names() {
    let odd = Record::new("My Label").with("key-with-dash", 1);
    let query = Expr::empty().create("1st", &odd).render();
    assert_eq!(query, "CREATE (`1st`:`My Label` { `key-with-dash`: 1 })");
}

// ============================================================================
// 6. Several creates, one per line
// ============================================================================

#[test]
fn test_two_creates_two_lines() {
    let query = Expr::empty()
        .create_empty("a", "A")
        .create_empty("b", "B")
        .render();
    assert_eq!(query, "CREATE (a:A)\nCREATE (b:B)");
    assert!(!query.starts_with('\n'));
}
