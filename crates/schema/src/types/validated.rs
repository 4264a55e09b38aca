//! `validated_type` (spec §4.10): the idiomatic way to derive e.g.
//! `Email = validated_type(StringType::new(), "Email", matches_regex(...))`.

use std::sync::Arc;

use nebula_validator::core::Validate;
use serde_json::Value as JsonValue;

use crate::context::Context;
use crate::error::SchemaError;
use crate::schema_type::{SchemaType, ValueValidator};
use crate::value::Value;

/// `base_type` with one validator prepended to its validator list.
pub struct ValidatedType {
    inner: Arc<dyn SchemaType>,
    name: Option<String>,
    validators: Vec<Arc<ValueValidator>>,
}

impl SchemaType for ValidatedType {
    fn name(&self) -> Option<&str> {
        self.name.as_deref().or_else(|| self.inner.name())
    }

    fn description(&self) -> Option<&str> {
        self.inner.description()
    }

    fn validators(&self) -> &[Arc<ValueValidator>] {
        &self.validators
    }

    fn _load(&self, data: &JsonValue, ctx: &Context) -> Result<Value, SchemaError> {
        self.inner._load(data, ctx)
    }

    fn _dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        self.inner._dump(value, ctx)
    }
}

/// Returns a new type that is `base_type` with `validator` prepended to
/// its validator list.
pub fn validated_type(
    base: impl SchemaType + 'static,
    name: impl Into<Option<String>>,
    validator: impl Validate<Input = Value> + 'static,
) -> ValidatedType {
    let inner: Arc<dyn SchemaType> = Arc::new(base);
    let mut validators: Vec<Arc<ValueValidator>> = vec![Arc::new(validator)];
    validators.extend(inner.validators().iter().cloned());
    ValidatedType {
        inner,
        name: name.into(),
        validators,
    }
}
