//! Wrapper types that alter one semantic axis of an inner type without
//! changing its shape (spec §4.5). All five forward `name`/`description`/
//! `validators` to the inner type, "so a user can still add validators to
//! a wrapped type" — build the inner type with its validators first, then
//! wrap it.

use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::context::Context;
use crate::error::SchemaError;
use crate::schema_type::{SchemaType, ValueValidator};
use crate::value::Value;

/// A load/dump default: either a fixed value or a zero-arg generator
/// producing a fresh value per invocation (spec §4.5, `Optional`'s
/// `load_default`/`dump_default`).
#[derive(Clone)]
pub enum ValueProducer {
    Literal(Value),
    Generator(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl ValueProducer {
    pub fn produce(&self) -> Value {
        match self {
            ValueProducer::Literal(value) => value.clone(),
            ValueProducer::Generator(generator) => generator(),
        }
    }

    pub fn generator(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        ValueProducer::Generator(Arc::new(f))
    }
}

impl From<Value> for ValueProducer {
    fn from(value: Value) -> Self {
        ValueProducer::Literal(value)
    }
}

impl From<&str> for ValueProducer {
    fn from(value: &str) -> Self {
        ValueProducer::Literal(Value::String(value.to_string()))
    }
}

/// `Constant(V, inner=Any)`: dumps to `V` regardless of input; loads only
/// if the external value equals `V`. Carries an `inner` type purely so
/// `name`/`description`/`validators` have somewhere to forward to, same
/// as the other four modifiers — a user can still attach a validator to
/// a `Constant` even though its load/dump behavior never consults it.
pub struct Constant {
    literal: Value,
    literal_json: JsonValue,
    inner: Arc<dyn SchemaType>,
}

impl Constant {
    pub fn new(literal: impl Into<Value>) -> Self {
        Self::with_inner(literal, Arc::new(crate::types::primitive::Any::new()))
    }

    pub fn with_inner(literal: impl Into<Value>, inner: Arc<dyn SchemaType>) -> Self {
        let literal = literal.into();
        let literal_json = literal.into_json().unwrap_or(JsonValue::Null);
        Self {
            literal,
            literal_json,
            inner,
        }
    }
}

impl SchemaType for Constant {
    fn name(&self) -> Option<&str> {
        self.inner.name()
    }

    fn description(&self) -> Option<&str> {
        self.inner.description()
    }

    fn validators(&self) -> &[Arc<ValueValidator>] {
        self.inner.validators()
    }

    fn _load(&self, data: &JsonValue, _ctx: &Context) -> Result<Value, SchemaError> {
        if *data == self.literal_json {
            Ok(self.literal.clone())
        } else {
            Err(SchemaError::constant_mismatch(&self.literal_json.to_string()))
        }
    }

    fn _dump(&self, _value: &Value, _ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        Ok(Some(self.literal_json.clone()))
    }
}

/// `Optional(T, load_default, dump_default)`.
pub struct Optional {
    inner: Arc<dyn SchemaType>,
    load_default: Option<ValueProducer>,
    dump_default: Option<ValueProducer>,
}

impl Optional {
    pub fn new(inner: Arc<dyn SchemaType>) -> Self {
        Self {
            inner,
            load_default: None,
            dump_default: None,
        }
    }

    pub fn of(inner: impl SchemaType + 'static) -> Self {
        Self::new(Arc::new(inner))
    }

    #[must_use]
    pub fn load_default(mut self, producer: impl Into<ValueProducer>) -> Self {
        self.load_default = Some(producer.into());
        self
    }

    #[must_use]
    pub fn dump_default(mut self, producer: impl Into<ValueProducer>) -> Self {
        self.dump_default = Some(producer.into());
        self
    }
}

impl SchemaType for Optional {
    fn name(&self) -> Option<&str> {
        self.inner.name()
    }

    fn description(&self) -> Option<&str> {
        self.inner.description()
    }

    fn validators(&self) -> &[Arc<ValueValidator>] {
        self.inner.validators()
    }

    fn _load(&self, data: &JsonValue, ctx: &Context) -> Result<Value, SchemaError> {
        self.inner._load(data, ctx)
    }

    fn _dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        self.inner._dump(value, ctx)
    }

    /// Overrides the default pipeline entirely: when the external value
    /// is absent, the loaded result is the (possibly generated) default
    /// with no validators run against it — there is nothing supplied to
    /// validate.
    fn load(&self, data: &JsonValue, ctx: &Context) -> Result<Value, SchemaError> {
        if matches!(data, JsonValue::Null) {
            return Ok(self
                .load_default
                .as_ref()
                .map(ValueProducer::produce)
                .unwrap_or(Value::Missing));
        }
        self.inner.load(data, ctx)
    }

    /// Overrides the default pipeline: absent internal value substitutes
    /// `dump_default` if given, else is omitted — never "value is
    /// required" (spec §4.3's exception for `Optional`).
    fn dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        if value.is_missing() {
            return match &self.dump_default {
                Some(producer) => self.inner.dump(&producer.produce(), ctx),
                None => Ok(None),
            };
        }
        self.inner.dump(value, ctx)
    }
}

/// `LoadOnly(T)`: `load` delegates to `T`; `dump` always omits.
pub struct LoadOnly {
    inner: Arc<dyn SchemaType>,
}

impl LoadOnly {
    pub fn new(inner: Arc<dyn SchemaType>) -> Self {
        Self { inner }
    }

    pub fn of(inner: impl SchemaType + 'static) -> Self {
        Self::new(Arc::new(inner))
    }
}

impl SchemaType for LoadOnly {
    fn name(&self) -> Option<&str> {
        self.inner.name()
    }

    fn description(&self) -> Option<&str> {
        self.inner.description()
    }

    fn validators(&self) -> &[Arc<ValueValidator>] {
        self.inner.validators()
    }

    fn _load(&self, data: &JsonValue, ctx: &Context) -> Result<Value, SchemaError> {
        self.inner._load(data, ctx)
    }

    fn _dump(&self, _value: &Value, _ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        Ok(None)
    }

    fn load(&self, data: &JsonValue, ctx: &Context) -> Result<Value, SchemaError> {
        self.inner.load(data, ctx)
    }

    fn dump(&self, _value: &Value, _ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        Ok(None)
    }
}

/// `DumpOnly(T)`: `dump` delegates to `T`; `load` always returns
/// `MISSING` with no error, no validators run.
pub struct DumpOnly {
    inner: Arc<dyn SchemaType>,
}

impl DumpOnly {
    pub fn new(inner: Arc<dyn SchemaType>) -> Self {
        Self { inner }
    }

    pub fn of(inner: impl SchemaType + 'static) -> Self {
        Self::new(Arc::new(inner))
    }
}

impl SchemaType for DumpOnly {
    fn name(&self) -> Option<&str> {
        self.inner.name()
    }

    fn description(&self) -> Option<&str> {
        self.inner.description()
    }

    fn _load(&self, _data: &JsonValue, _ctx: &Context) -> Result<Value, SchemaError> {
        Ok(Value::Missing)
    }

    fn _dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        self.inner._dump(value, ctx)
    }

    fn load(&self, _data: &JsonValue, _ctx: &Context) -> Result<Value, SchemaError> {
        Ok(Value::Missing)
    }

    fn dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        self.inner.dump(value, ctx)
    }
}

type PreLoad = Arc<dyn Fn(&JsonValue) -> JsonValue + Send + Sync>;
type PostDump = Arc<dyn Fn(JsonValue) -> JsonValue + Send + Sync>;

/// `Transform(T, pre_load, post_dump)`: retrofits custom coercions
/// without subclassing `T`.
pub struct Transform {
    inner: Arc<dyn SchemaType>,
    pre_load: Option<PreLoad>,
    post_dump: Option<PostDump>,
}

impl Transform {
    pub fn new(inner: Arc<dyn SchemaType>) -> Self {
        Self {
            inner,
            pre_load: None,
            post_dump: None,
        }
    }

    pub fn of(inner: impl SchemaType + 'static) -> Self {
        Self::new(Arc::new(inner))
    }

    #[must_use]
    pub fn pre_load(mut self, f: impl Fn(&JsonValue) -> JsonValue + Send + Sync + 'static) -> Self {
        self.pre_load = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn post_dump(mut self, f: impl Fn(JsonValue) -> JsonValue + Send + Sync + 'static) -> Self {
        self.post_dump = Some(Arc::new(f));
        self
    }
}

impl SchemaType for Transform {
    fn name(&self) -> Option<&str> {
        self.inner.name()
    }

    fn description(&self) -> Option<&str> {
        self.inner.description()
    }

    fn validators(&self) -> &[Arc<ValueValidator>] {
        self.inner.validators()
    }

    fn _load(&self, data: &JsonValue, ctx: &Context) -> Result<Value, SchemaError> {
        self.inner._load(data, ctx)
    }

    fn _dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        self.inner._dump(value, ctx)
    }

    fn load(&self, data: &JsonValue, ctx: &Context) -> Result<Value, SchemaError> {
        match &self.pre_load {
            Some(f) => self.inner.load(&f(data), ctx),
            None => self.inner.load(data, ctx),
        }
    }

    fn dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        let dumped = self.inner.dump(value, ctx)?;
        Ok(match (&self.post_dump, dumped) {
            (Some(f), Some(json)) => Some(f(json)),
            (_, other) => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::primitive::StringType;

    fn ctx() -> Context {
        Context::new()
    }

    #[test]
    fn constant_loads_matching_literal_and_rejects_others() {
        let t = Constant::new("circle");
        assert!(t.load(&JsonValue::String("circle".into()), &ctx()).is_ok());
        assert!(t.load(&JsonValue::String("square".into()), &ctx()).is_err());
    }

    #[test]
    fn constant_dumps_literal_regardless_of_input() {
        let t = Constant::new("circle");
        assert_eq!(
            t.dump(&Value::Missing, &ctx()).unwrap(),
            Some(JsonValue::String("circle".into()))
        );
    }

    #[test]
    fn optional_applies_load_default_on_null() {
        let t = Optional::of(StringType::new()).load_default(Value::String("customer".into()));
        let loaded = t.load(&JsonValue::Null, &ctx()).unwrap();
        assert_eq!(loaded, Value::String("customer".into()));
    }

    #[test]
    fn optional_without_dump_default_omits_missing() {
        let t = Optional::of(StringType::new());
        assert_eq!(t.dump(&Value::Missing, &ctx()).unwrap(), None);
    }

    #[test]
    fn load_only_never_produces_external_value() {
        let t = LoadOnly::of(StringType::new());
        assert!(t.load(&JsonValue::String("x".into()), &ctx()).is_ok());
        assert_eq!(t.dump(&Value::String("x".into()), &ctx()).unwrap(), None);
    }

    #[test]
    fn dump_only_never_loads() {
        let t = DumpOnly::of(StringType::new());
        assert_eq!(
            t.load(&JsonValue::String("x".into()), &ctx()).unwrap(),
            Value::Missing
        );
        assert!(t.dump(&Value::String("x".into()), &ctx()).unwrap().is_some());
    }

    #[test]
    fn transform_applies_pre_load_and_post_dump() {
        let t = Transform::of(StringType::new())
            .pre_load(|v| match v {
                JsonValue::String(s) => JsonValue::String(s.trim().to_string()),
                other => other.clone(),
            })
            .post_dump(|v| match v {
                JsonValue::String(s) => JsonValue::String(s.to_uppercase()),
                other => other,
            });
        let loaded = t.load(&JsonValue::String("  hi  ".into()), &ctx()).unwrap();
        assert_eq!(loaded, Value::String("hi".into()));
        assert_eq!(
            t.dump(&loaded, &ctx()).unwrap(),
            Some(JsonValue::String("HI".into()))
        );
    }
}
