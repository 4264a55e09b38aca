//! The Type interface (spec §4.3): every kernel type — primitives,
//! containers, modifiers, [`crate::object::Object`], [`crate::one_of::OneOf`],
//! registry proxies — implements this one object-safe trait so that
//! container types can hold heterogeneous children as `Arc<dyn SchemaType>`
//! (SPEC_FULL.md, "`SchemaType` trait object composition").

use std::sync::Arc;

use nebula_validator::core::Validate;
use serde_json::Value as JsonValue;

use crate::context::Context;
use crate::error::{ErrorBuilder, SchemaError};
use crate::value::Value;

/// Object-level and per-type validators run against the already-loaded
/// [`Value`] (spec §3.3) — concretely `nebula-validator`'s `Validate`
/// trait fixed to `Input = Value`, reusing its combinator algebra instead
/// of a second one (SPEC_FULL.md).
pub type ValueValidator = dyn Validate<Input = Value>;

/// The abstract bidirectional codec + validator (spec §3.3, §4.3).
///
/// The public `load`/`dump`/`validate` methods are provided with default
/// bodies that call the `_load`/`_dump` override points — "subclassing
/// override points are `_load` and `_dump` (structural) so that the
/// public `load` retains the invariant 'validators run after `_load`'"
/// (spec §4.3). Implementors needing nonstandard control flow (the
/// modifier types in [`crate::types::modifier`]) override `load`/`dump`
/// directly instead.
///
/// `dump` returns `Ok(None)` rather than an error when the value is
/// [`Value::Missing`] and this type tolerates absence (`LoadOnly`,
/// `DumpOnly`, `Optional` with no dump default) — the caller (an
/// `Object`'s field loop, or a container) decides what "no external
/// representation" means for its position. A type that does *not*
/// tolerate absence returns `Err` for `Value::Missing`, per spec §4.3:
/// "the type reports 'value is required' unless wrapped by
/// Optional/LoadOnly/DumpOnly".
pub trait SchemaType: Send + Sync {
    fn name(&self) -> Option<&str> {
        None
    }

    fn description(&self) -> Option<&str> {
        None
    }

    /// Validators run, in order, against the value `_load` produced.
    fn validators(&self) -> &[Arc<ValueValidator>] {
        &[]
    }

    /// Structural decode: external JSON → internal [`Value`]. Must not
    /// run validators; `load` does that afterward.
    fn _load(&self, data: &JsonValue, ctx: &Context) -> Result<Value, SchemaError>;

    /// Structural encode: internal [`Value`] → external JSON, or `None`
    /// if this value has no external representation at this position.
    fn _dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError>;

    /// Runs `_load`, then every validator against the result.
    fn load(&self, data: &JsonValue, ctx: &Context) -> Result<Value, SchemaError> {
        let loaded = self._load(data, ctx)?;
        run_validators(self.validators(), &loaded)?;
        Ok(loaded)
    }

    /// Runs `_dump`. The default body is a direct passthrough; it exists
    /// as a separate method (rather than callers using `_dump` directly)
    /// so that types composing this one through a trait object always go
    /// through the same public entry point.
    fn dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        self._dump(value, ctx)
    }

    /// Equivalent to running `load` and reporting the error shape instead
    /// of raising (spec §4.3).
    fn validate(&self, data: &JsonValue, ctx: &Context) -> Option<SchemaError> {
        self.load(data, ctx).err()
    }
}

/// Shared `name`/`description`/`validators` storage for the leaf types in
/// [`crate::types`] — every primitive and container type embeds one of
/// these rather than repeating the same three fields and builder methods
/// on each struct.
#[derive(Default)]
pub(crate) struct TypeMeta {
    pub name: Option<String>,
    pub description: Option<String>,
    pub validators: Vec<Arc<ValueValidator>>,
}

impl TypeMeta {
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_validator(mut self, validator: impl Validate<Input = Value> + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }
}

/// Runs `validators` against `loaded`, merging every failure into one
/// tree. Exposed crate-wide so [`crate::object::Object`] can run its own
/// object-level validators against the constructed value outside the
/// default `load` pipeline (which only sees the not-yet-downcast `Value`).
pub(crate) fn run_validators(
    validators: &[Arc<ValueValidator>],
    loaded: &Value,
) -> Result<(), SchemaError> {
    let mut builder = ErrorBuilder::new();
    for validator in validators {
        if let Err(error) = validator.validate(loaded) {
            builder.add_tree("", SchemaError::from_validate_error(&error));
        }
    }
    builder.raise_errors()
}

/// Convenience for container/field code: dumps a value that is expected
/// to always have an external representation at this position (list
/// elements, tuple slots — unlike `Object` fields, these never omit).
pub fn dump_required(
    schema_type: &dyn SchemaType,
    value: &Value,
    ctx: &Context,
) -> Result<JsonValue, SchemaError> {
    match schema_type.dump(value, ctx)? {
        Some(json) => Ok(json),
        None => Err(SchemaError::required()),
    }
}
