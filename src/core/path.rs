//! Purpose: Walk a decoded JSON tree along a dotted path (`a.0.b`).
//! Exports: `Lookup`, `lookup`, `resolve`.
//! Role: The only place that interprets path segments; getters build on it.
//! Invariants: Segment meaning comes from the current node's shape, never from the segment text.
//! Invariants: Resolution never panics and never reports explicit `null` as found.
//! Notes: There is no escaping; a key containing `.` cannot be addressed.

use serde_json::{Map, Value};

/// Shape of a node as seen by the resolver.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Shape<'a> {
    Array(&'a [Value]),
    Object(&'a Map<String, Value>),
    Other,
}

pub(crate) fn classify(value: &Value) -> Shape<'_> {
    match value {
        Value::Array(items) => Shape::Array(items),
        Value::Object(map) => Shape::Object(map),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Shape::Other,
    }
}

/// Outcome of a path lookup that keeps explicit `null` apart from absence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lookup<'a> {
    /// Some segment could not be followed.
    Missing,
    /// The path exists and holds JSON `null`.
    Null,
    /// The path exists and holds a non-null value.
    Found(&'a Value),
}

impl<'a> Lookup<'a> {
    /// Collapses `Null` into absence.
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Self::Found(value) => Some(value),
            Self::Missing | Self::Null => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Three-state lookup of `path` in `tree`.
pub fn lookup<'a>(tree: Option<&'a Value>, path: &str) -> Lookup<'a> {
    let Some(mut current) = tree else {
        return Lookup::Missing;
    };

    let (intermediate, terminal) = match path.rsplit_once('.') {
        Some((head, last)) => (Some(head), last),
        None => (None, path),
    };

    for segment in intermediate.into_iter().flat_map(|head| head.split('.')) {
        match step(current, segment) {
            Some(next) => current = next,
            None => return Lookup::Missing,
        }
    }

    match step(current, terminal) {
        None => Lookup::Missing,
        Some(Value::Null) => Lookup::Null,
        Some(value) => Lookup::Found(value),
    }
}

/// Returns the value at `path`, treating explicit `null` as absent.
pub fn resolve<'a>(tree: Option<&'a Value>, path: &str) -> Option<&'a Value> {
    lookup(tree, path).value()
}

fn step<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
    match classify(node) {
        Shape::Array(items) => items.get(parse_index(segment)?),
        Shape::Object(map) => map.get(segment),
        Shape::Other => None,
    }
}

// Digits only: `str::parse` alone would also accept a leading `+`.
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::{Lookup, Shape, classify, lookup, parse_index, resolve};
    use serde_json::{Value, json};

    #[test]
    fn parse_index_accepts_plain_digits_only() {
        assert_eq!(parse_index("0"), Some(0));
        assert_eq!(parse_index("42"), Some(42));
        assert_eq!(parse_index("007"), Some(7));
        assert_eq!(parse_index(""), None);
        assert_eq!(parse_index("+1"), None);
        assert_eq!(parse_index("-1"), None);
        assert_eq!(parse_index("-0"), None);
        assert_eq!(parse_index(" 1"), None);
        assert_eq!(parse_index("1 "), None);
        assert_eq!(parse_index("1e2"), None);
        assert_eq!(parse_index("99999999999999999999999999"), None);
    }

    #[test]
    fn classify_covers_every_variant() {
        assert!(matches!(classify(&json!([1])), Shape::Array(items) if items.len() == 1));
        assert!(matches!(classify(&json!({"a": 1})), Shape::Object(map) if map.len() == 1));
        for other in [json!(null), json!(true), json!(1.5), json!("s")] {
            assert!(matches!(classify(&other), Shape::Other));
        }
    }

    #[test]
    fn nested_objects_and_arrays() {
        let tree = json!({"a": {"b": {"c": 42}}, "list": [10, {"x": "y"}]});
        assert_eq!(resolve(Some(&tree), "a.b.c"), Some(&json!(42)));
        assert_eq!(resolve(Some(&tree), "list.0"), Some(&json!(10)));
        assert_eq!(resolve(Some(&tree), "list.1.x"), Some(&json!("y")));
        assert_eq!(resolve(Some(&tree), "a.b"), Some(&json!({"c": 42})));
    }

    #[test]
    fn absent_tree_is_missing() {
        assert_eq!(lookup(None, "a"), Lookup::Missing);
        assert_eq!(resolve(None, ""), None);
    }

    #[test]
    fn scalar_root_cannot_be_walked() {
        let tree = json!(7);
        assert_eq!(lookup(Some(&tree), "0"), Lookup::Missing);
        assert_eq!(lookup(Some(&tree), "a.b"), Lookup::Missing);
    }

    #[test]
    fn array_root_is_indexed_directly() {
        let tree = json!([["x", "y"], {"k": true}]);
        assert_eq!(resolve(Some(&tree), "0.1"), Some(&json!("y")));
        assert_eq!(resolve(Some(&tree), "1.k"), Some(&json!(true)));
        assert_eq!(resolve(Some(&tree), "2"), None);
    }

    #[test]
    fn explicit_null_is_reported_separately_by_lookup() {
        let tree = json!({"a": null, "b": {"c": null}});
        assert_eq!(lookup(Some(&tree), "a"), Lookup::Null);
        assert_eq!(lookup(Some(&tree), "b.c"), Lookup::Null);
        assert_eq!(resolve(Some(&tree), "a"), None);
        assert_eq!(lookup(Some(&tree), "a.x"), Lookup::Missing);
    }

    #[test]
    fn numeric_key_on_object_is_a_key() {
        let tree = json!({"0": "zero", "items": {"1": "one"}});
        assert_eq!(resolve(Some(&tree), "0"), Some(&json!("zero")));
        assert_eq!(resolve(Some(&tree), "items.1"), Some(&json!("one")));
    }

    #[test]
    fn empty_segments_are_empty_keys() {
        let tree = json!({"": {"": 1}, "a": {"": 2}, "list": [3]});
        assert_eq!(resolve(Some(&tree), "."), Some(&json!(1)));
        assert_eq!(resolve(Some(&tree), "a."), Some(&json!(2)));
        assert_eq!(resolve(Some(&tree), ""), Some(&json!({"": 1})));
        assert_eq!(resolve(Some(&tree), "list."), None);
    }

    #[test]
    fn intermediate_scalar_stops_the_walk() {
        let tree = json!({"a": "text", "n": [1, 2]});
        assert_eq!(lookup(Some(&tree), "a.b.c"), Lookup::Missing);
        assert_eq!(lookup(Some(&tree), "n.0.x"), Lookup::Missing);
    }

    #[test]
    fn lookup_value_matches_resolve() {
        let tree = json!({"a": [false, null, 0, ""]});
        for path in ["a.0", "a.1", "a.2", "a.3", "a.4", "b"] {
            assert_eq!(lookup(Some(&tree), path).value(), resolve(Some(&tree), path));
        }
        assert_eq!(resolve(Some(&tree), "a.0"), Some(&Value::Bool(false)));
    }
}
