//! The internal value universe `I` (spec §3.2).
//!
//! Opaque to the kernel except where specific types dictate: this is a
//! hand-rolled sum because the internal side legitimately needs variants
//! the external JSON universe does not have — [`Value::Missing`], the
//! tuple/date/time/record shapes. The *external* universe is not
//! reimplemented here: it is `serde_json::Value`, used directly at every
//! `load`/`dump` boundary.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use indexmap::IndexMap;
use serde_json::Value as JsonValue;

/// One internal value flowing between `load` and `dump`.
///
/// [`Value::Missing`] is the sentinel from spec §3.4: "no value present".
/// It is never produced by converting external JSON and never survives to
/// a produced external tree — see [`Value::into_json`].
#[derive(Debug, Clone)]
pub enum Value {
    Missing,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Seq(Vec<Value>),
    Tuple(Vec<Value>),
    Map(IndexMap<String, Value>),
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(DateTime<Utc>),
    /// A constructed application object, type-erased. Only ever produced
    /// by [`crate::object::Object::_load`] and consumed by
    /// [`crate::field::Field`] accessors that downcast back to the
    /// concrete record type.
    Record(Arc<dyn Any + Send + Sync>),
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Spec §4.3: "a `Null` external value is equivalent to `MISSING` for
    /// purposes of required-field detection".
    pub fn is_absent(&self) -> bool {
        self.is_missing() || self.is_null()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_record<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Record(r) => r.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// The JSON-equivalent variant name, used in type-mismatch messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Missing => "missing",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Seq(_) => "array",
            Value::Tuple(_) => "tuple",
            Value::Map(_) => "object",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
            Value::DateTime(_) => "datetime",
            Value::Record(_) => "record",
        }
    }

    /// Converts an external JSON value into its internal equivalent.
    ///
    /// Used by [`crate::types::primitive::Any`] (which accepts any shape
    /// unchanged) and by container types when recursing into children
    /// whose element type is itself `Any`. Numbers that fit in `i64`
    /// become [`Value::Int`]; everything else numeric becomes
    /// [`Value::Float`].
    pub fn from_json(json: &JsonValue) -> Value {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(items) => Value::Seq(items.iter().map(Value::from_json).collect()),
            JsonValue::Object(map) => Value::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Converts this internal value to its external JSON equivalent.
    ///
    /// Returns `None` for [`Value::Missing`] and [`Value::Record`], which
    /// have no external representation — callers in this crate never let
    /// either reach this conversion at the top level; see
    /// [`crate::schema_type::SchemaType::dump`].
    pub fn into_json(&self) -> Option<JsonValue> {
        match self {
            Value::Missing | Value::Record(_) => None,
            Value::Null => Some(JsonValue::Null),
            Value::Bool(b) => Some(JsonValue::Bool(*b)),
            Value::Int(i) => Some(JsonValue::Number((*i).into())),
            Value::Float(f) => serde_json::Number::from_f64(*f).map(JsonValue::Number),
            Value::String(s) => Some(JsonValue::String(s.clone())),
            Value::Seq(items) | Value::Tuple(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(item.into_json()?);
                }
                Some(JsonValue::Array(out))
            }
            Value::Map(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                for (k, v) in map {
                    out.insert(k.clone(), v.into_json()?);
                }
                Some(JsonValue::Object(out))
            }
            Value::Date(d) => Some(JsonValue::String(d.format("%Y-%m-%d").to_string())),
            Value::Time(t) => Some(JsonValue::String(t.format("%H:%M:%S").to_string())),
            Value::DateTime(dt) => Some(JsonValue::String(dt.to_rfc3339())),
        }
    }
}

/// The JSON variant name of an external value, used in type-mismatch
/// messages reported by `_load` implementations.
pub fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(n) if n.is_i64() || n.is_u64() => "integer",
        JsonValue::Number(_) => "float",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Missing, Value::Missing) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) | (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Time(a), Value::Time(b)) => a == b,
            (Value::DateTime(a), Value::DateTime(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.into_json() {
            Some(json) => write!(f, "{json}"),
            None => write!(f, "<{}>", self.kind()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Any + Send + Sync> From<Arc<T>> for Value {
    fn from(record: Arc<T>) -> Self {
        Value::Record(record)
    }
}
