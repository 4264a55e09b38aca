//! The path-addressable validation error tree (spec §4.1) and the
//! accumulating [`ErrorBuilder`] that constructs it.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// A structured validation failure.
///
/// Two shapes, matching spec §4.1's table exactly: a leaf carries one or
/// more human-readable messages (more than one only after two `add_error`
/// calls land on the same path); a nested node maps a path segment (field
/// name or list index, always as a string) to another `SchemaError`.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    Leaf(Vec<String>),
    Nested(IndexMap<String, SchemaError>),
}

/// Serializes via [`SchemaError::to_json`]'s shape directly (spec §6: "the
/// error reporting shape is part of the contract") so callers can
/// `serde_json::to_string(&error)` without going through `to_json` first.
impl Serialize for SchemaError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl SchemaError {
    pub fn leaf(message: impl Into<String>) -> Self {
        SchemaError::Leaf(vec![message.into()])
    }

    pub fn nested(children: IndexMap<String, SchemaError>) -> Self {
        SchemaError::Nested(children)
    }

    /// Exact wording from spec §8 seed scenario 2 (`{"age":"Value is required"}`).
    pub fn required() -> Self {
        SchemaError::leaf("Value is required")
    }

    pub fn type_mismatch(expected: &str, actual: &str) -> Self {
        SchemaError::leaf(format!("expected {expected}, got {actual}"))
    }

    pub fn unknown_field() -> Self {
        SchemaError::leaf("unknown field")
    }

    pub fn constant_mismatch(expected: &str) -> Self {
        SchemaError::leaf(format!("value must equal {expected}"))
    }

    pub fn polymorphic_mismatch() -> Self {
        SchemaError::leaf("invalid data")
    }

    pub fn not_mapping() -> Self {
        SchemaError::leaf("value should be mapping")
    }

    pub fn wrong_arity(expected: usize, actual: usize) -> Self {
        SchemaError::leaf(format!("expected {expected} elements, got {actual}"))
    }

    /// Wraps this error one level deeper, under a single path segment.
    /// Used by containers and `Object` to attach a child's whole error
    /// tree under the index/field name that produced it.
    #[must_use]
    pub fn under(self, segment: impl Into<String>) -> Self {
        let mut map = IndexMap::new();
        map.insert(segment.into(), self);
        SchemaError::Nested(map)
    }

    /// Merges two error trees, as the builder does for overlapping paths:
    /// `Leaf` + `Leaf` concatenates messages; `Nested` + `Nested` merges
    /// key-by-key (recursing on shared keys); mismatched shapes keep both
    /// by nesting the leaf under an empty-string key, since that
    /// combination does not occur through the public API.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (SchemaError::Leaf(mut a), SchemaError::Leaf(b)) => {
                a.extend(b);
                SchemaError::Leaf(a)
            }
            (SchemaError::Nested(mut a), SchemaError::Nested(b)) => {
                for (key, value) in b {
                    a.entry(key)
                        .and_modify(|existing| {
                            let taken = std::mem::replace(existing, SchemaError::Leaf(vec![]));
                            *existing = taken.merge(value.clone());
                        })
                        .or_insert(value);
                }
                SchemaError::Nested(a)
            }
            (leaf @ SchemaError::Leaf(_), SchemaError::Nested(mut b)) => {
                b.insert(String::new(), leaf);
                SchemaError::Nested(b)
            }
            (SchemaError::Nested(mut a), leaf @ SchemaError::Leaf(_)) => {
                a.insert(String::new(), leaf);
                SchemaError::Nested(a)
            }
        }
    }

    /// Renders this tree as the JSON shape described in spec §6: a single
    /// message is a bare string, multiple messages at one leaf become an
    /// array, nested nodes become objects.
    pub fn to_json(&self) -> JsonValue {
        match self {
            SchemaError::Leaf(messages) if messages.len() == 1 => {
                JsonValue::String(messages[0].clone())
            }
            SchemaError::Leaf(messages) => {
                JsonValue::Array(messages.iter().cloned().map(JsonValue::String).collect())
            }
            SchemaError::Nested(children) => {
                let mut map = serde_json::Map::with_capacity(children.len());
                for (key, value) in children {
                    map.insert(key.clone(), value.to_json());
                }
                JsonValue::Object(map)
            }
        }
    }

    /// Bridges a `nebula_validator` failure into a tree leaf, preserving
    /// its field/message (SPEC_FULL.md, "`nebula_validator` integration").
    pub fn from_validate_error(error: &nebula_validator::core::ValidationError) -> Self {
        let mut messages = vec![error.message.clone()];
        for nested in &error.nested {
            if let SchemaError::Leaf(more) = SchemaError::from_validate_error(nested) {
                messages.extend(more);
            }
        }
        let leaf = SchemaError::Leaf(messages);
        match &error.field {
            Some(field) => leaf.under(field.clone()),
            None => leaf,
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl std::error::Error for SchemaError {}

/// One parsed path segment: either a field name or a list index, both
/// carried as strings per spec §4.1 ("path segment (field name or list
/// index, as string)").
fn parse_path(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    for dotted in path.split('.') {
        let mut rest = dotted;
        while let Some(open) = rest.find('[') {
            let (head, tail) = rest.split_at(open);
            if !head.is_empty() {
                segments.push(head.to_string());
            }
            match tail.find(']') {
                Some(close) => {
                    segments.push(tail[1..close].to_string());
                    rest = &tail[close + 1..];
                }
                None => {
                    rest = "";
                }
            }
        }
        if !rest.is_empty() {
            segments.push(rest.to_string());
        }
    }
    segments
}

/// Accumulates path-scoped failures and raises a single merged
/// [`SchemaError`] tree (spec §4.1).
#[derive(Debug, Default)]
pub struct ErrorBuilder {
    tree: Option<SchemaError>,
}

impl ErrorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a plain message at `path` ("foo.bar" or "items[3].name").
    pub fn add_error(&mut self, path: &str, message: impl Into<String>) {
        self.add_tree(path, SchemaError::leaf(message));
    }

    /// Records an already-built error tree at `path` — used when a
    /// child's `load` failed and its whole `SchemaError` should be
    /// attached under the field/index that produced it.
    pub fn add_tree(&mut self, path: &str, error: SchemaError) {
        let wrapped = parse_path(path)
            .into_iter()
            .rev()
            .fold(error, |acc, segment| acc.under(segment));
        self.tree = Some(match self.tree.take() {
            Some(existing) => existing.merge(wrapped),
            None => wrapped,
        });
    }

    pub fn has_errors(&self) -> bool {
        self.tree.is_some()
    }

    /// Returns `Ok(())` if nothing was recorded, else the merged tree.
    pub fn raise_errors(self) -> Result<(), SchemaError> {
        match self.tree {
            Some(tree) => Err(tree),
            None => Ok(()),
        }
    }

    /// Consumes the builder, returning the merged tree if any errors were
    /// recorded.
    pub fn into_error(self) -> Option<SchemaError> {
        self.tree
    }
}
