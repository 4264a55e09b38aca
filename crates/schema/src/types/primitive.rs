//! Scalar types and the untyped passthrough (spec §4.4).

use nebula_validator::core::Validate;
use serde_json::Value as JsonValue;

use crate::context::Context;
use crate::error::SchemaError;
use crate::schema_type::{SchemaType, TypeMeta, ValueValidator};
use crate::value::{json_kind, Value};

macro_rules! delegate_meta {
    () => {
        fn name(&self) -> Option<&str> {
            self.meta.name.as_deref()
        }

        fn description(&self) -> Option<&str> {
            self.meta.description.as_deref()
        }

        fn validators(&self) -> &[std::sync::Arc<ValueValidator>] {
            &self.meta.validators
        }
    };
}

/// `Any`: accepts anything, dumps it back unchanged. Unlike the other
/// primitives, a JSON `null` is a legitimate loaded value here rather
/// than "absent" — there is no narrower shape to reject it against.
#[derive(Default)]
pub struct Any {
    meta: TypeMeta,
}

impl Any {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.meta = self.meta.named(name);
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: impl Validate<Input = Value> + 'static) -> Self {
        self.meta = self.meta.with_validator(validator);
        self
    }
}

impl SchemaType for Any {
    delegate_meta!();

    fn _load(&self, data: &JsonValue, _ctx: &Context) -> Result<Value, SchemaError> {
        Ok(Value::from_json(data))
    }

    fn _dump(&self, value: &Value, _ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        match value {
            Value::Missing => Err(SchemaError::required()),
            other => Ok(other.into_json()),
        }
    }
}

/// `String`. Named `StringType` to avoid shadowing `std::string::String`.
#[derive(Default)]
pub struct StringType {
    meta: TypeMeta,
}

impl StringType {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.meta = self.meta.named(name);
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: impl Validate<Input = Value> + 'static) -> Self {
        self.meta = self.meta.with_validator(validator);
        self
    }
}

impl SchemaType for StringType {
    delegate_meta!();

    fn _load(&self, data: &JsonValue, _ctx: &Context) -> Result<Value, SchemaError> {
        match data {
            JsonValue::Null => Err(SchemaError::required()),
            JsonValue::String(s) => Ok(Value::String(s.clone())),
            other => Err(SchemaError::type_mismatch("string", json_kind(other))),
        }
    }

    fn _dump(&self, value: &Value, _ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        match value {
            Value::Missing => Err(SchemaError::required()),
            Value::String(s) => Ok(Some(JsonValue::String(s.clone()))),
            other => Err(SchemaError::type_mismatch("string", other.kind())),
        }
    }
}

/// `Integer`. Rejects floats, digit strings, and booleans on load — spec
/// §4.4 lists all three as explicit rejections, since JSON booleans and
/// integers both arrive as `serde_json::Value::Bool`/`Number` and it
/// would be easy to accidentally coerce one into the other.
#[derive(Default)]
pub struct Integer {
    meta: TypeMeta,
}

impl Integer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.meta = self.meta.named(name);
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: impl Validate<Input = Value> + 'static) -> Self {
        self.meta = self.meta.with_validator(validator);
        self
    }
}

impl SchemaType for Integer {
    delegate_meta!();

    fn _load(&self, data: &JsonValue, _ctx: &Context) -> Result<Value, SchemaError> {
        match data {
            JsonValue::Null => Err(SchemaError::required()),
            JsonValue::Number(n) if n.is_i64() || n.is_u64() => {
                Ok(Value::Int(n.as_i64().unwrap_or_default()))
            }
            other => Err(SchemaError::type_mismatch("integer", json_kind(other))),
        }
    }

    fn _dump(&self, value: &Value, _ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        match value {
            Value::Missing => Err(SchemaError::required()),
            Value::Int(i) => Ok(Some(JsonValue::Number((*i).into()))),
            other => Err(SchemaError::type_mismatch("integer", other.kind())),
        }
    }
}

/// `Float`. Accepts both JSON integers and floats on load, per spec
/// §4.4's "load accepts: integer or float".
#[derive(Default)]
pub struct Float {
    meta: TypeMeta,
}

impl Float {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.meta = self.meta.named(name);
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: impl Validate<Input = Value> + 'static) -> Self {
        self.meta = self.meta.with_validator(validator);
        self
    }
}

impl SchemaType for Float {
    delegate_meta!();

    fn _load(&self, data: &JsonValue, _ctx: &Context) -> Result<Value, SchemaError> {
        match data {
            JsonValue::Null => Err(SchemaError::required()),
            JsonValue::Number(n) => Ok(Value::Float(n.as_f64().unwrap_or_default())),
            other => Err(SchemaError::type_mismatch("float", json_kind(other))),
        }
    }

    fn _dump(&self, value: &Value, _ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        match value {
            Value::Missing => Err(SchemaError::required()),
            Value::Float(f) => Ok(serde_json::Number::from_f64(*f).map(JsonValue::Number)),
            Value::Int(i) => Ok(serde_json::Number::from_f64(*i as f64).map(JsonValue::Number)),
            other => Err(SchemaError::type_mismatch("float", other.kind())),
        }
    }
}

/// `Boolean`.
#[derive(Default)]
pub struct Boolean {
    meta: TypeMeta,
}

impl Boolean {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.meta = self.meta.named(name);
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: impl Validate<Input = Value> + 'static) -> Self {
        self.meta = self.meta.with_validator(validator);
        self
    }
}

impl SchemaType for Boolean {
    delegate_meta!();

    fn _load(&self, data: &JsonValue, _ctx: &Context) -> Result<Value, SchemaError> {
        match data {
            JsonValue::Null => Err(SchemaError::required()),
            JsonValue::Bool(b) => Ok(Value::Bool(*b)),
            other => Err(SchemaError::type_mismatch("boolean", json_kind(other))),
        }
    }

    fn _dump(&self, value: &Value, _ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        match value {
            Value::Missing => Err(SchemaError::required()),
            Value::Bool(b) => Ok(Some(JsonValue::Bool(*b))),
            other => Err(SchemaError::type_mismatch("boolean", other.kind())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context::new()
    }

    #[test]
    fn string_accepts_string_rejects_others() {
        let t = StringType::new();
        assert!(t.load(&JsonValue::String("hi".into()), &ctx()).is_ok());
        assert!(t.load(&JsonValue::Bool(true), &ctx()).is_err());
        assert!(t.load(&JsonValue::from(3), &ctx()).is_err());
        assert!(t.load(&JsonValue::Null, &ctx()).is_err());
    }

    #[test]
    fn integer_rejects_float_and_boolean() {
        let t = Integer::new();
        assert!(t.load(&JsonValue::from(3), &ctx()).is_ok());
        assert!(t.load(&JsonValue::from(3.5), &ctx()).is_err());
        assert!(t.load(&JsonValue::Bool(true), &ctx()).is_err());
        assert!(t.load(&JsonValue::String("3".into()), &ctx()).is_err());
    }

    #[test]
    fn float_accepts_integer_and_float() {
        let t = Float::new();
        assert!(t.load(&JsonValue::from(3), &ctx()).is_ok());
        assert!(t.load(&JsonValue::from(3.5), &ctx()).is_ok());
        assert!(t.load(&JsonValue::String("3.5".into()), &ctx()).is_err());
    }

    #[test]
    fn any_accepts_everything_including_null() {
        let t = Any::new();
        assert!(t.load(&JsonValue::Null, &ctx()).is_ok());
        assert!(t.load(&JsonValue::from(3), &ctx()).is_ok());
        assert_eq!(
            t.dump(&Value::Int(3), &ctx()).unwrap(),
            Some(JsonValue::from(3))
        );
    }

    #[test]
    fn round_trip_preserves_value() {
        let t = StringType::new();
        let loaded = t.load(&JsonValue::String("hi".into()), &ctx()).unwrap();
        let dumped = t.dump(&loaded, &ctx()).unwrap();
        assert_eq!(dumped, Some(JsonValue::String("hi".into())));
    }
}
