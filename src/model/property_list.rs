//! PropertyList: the ordered name/value pairs rendered into a property block.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Value;

/// Ordered property pairs.
///
/// Unlike a map, a `PropertyList` keeps pairs exactly as supplied: no
/// sorting, no deduplication. Rendering walks it front to back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyList {
    pairs: SmallVec<[(String, Value); 8]>,
}

impl PropertyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.pairs.push((name.into(), value.into()));
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(name, value);
        self
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// First value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.pairs.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyList
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl<K, V> From<Vec<(K, V)>> for PropertyList
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl IntoIterator for PropertyList {
    type Item = (String, Value);
    type IntoIter = smallvec::IntoIter<[(String, Value); 8]>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_preserved() {
        let props = PropertyList::new().with("b", 1).with("a", 2).with("c", 3);
        let names: Vec<&str> = props.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let props: PropertyList = vec![("x", 1), ("x", 2)].into();
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("x"), Some(&Value::Int(1)));
    }

    #[test]
    fn test_empty() {
        assert!(PropertyList::new().is_empty());
        assert!(!PropertyList::new().with("a", true).is_empty());
    }
}
