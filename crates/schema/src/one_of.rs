//! Polymorphic dispatch across variant types (spec §4.8): the dictionary
//! form dispatches via user-supplied hints and reports precise
//! per-variant errors; the list form tries each variant in declaration
//! order and falls back to one generic message.

use std::sync::Arc;

use indexmap::IndexMap;
use nebula_validator::core::Validate;
use serde_json::Value as JsonValue;

use crate::context::Context;
use crate::error::SchemaError;
use crate::schema_type::{SchemaType, TypeMeta, ValueValidator};
use crate::value::Value;

pub type LoadHint = Arc<dyn Fn(&JsonValue) -> Option<String> + Send + Sync>;
pub type DumpHint = Arc<dyn Fn(&Value) -> Option<String> + Send + Sync>;

enum Dispatch {
    /// `OneOf({tag: T, ...}, load_hint, dump_hint)`.
    Dict {
        variants: IndexMap<String, Arc<dyn SchemaType>>,
        load_hint: LoadHint,
        dump_hint: DumpHint,
    },
    /// `OneOf([T1, T2, ...])`: first variant that does not raise wins,
    /// in both directions.
    List(Vec<Arc<dyn SchemaType>>),
}

pub struct OneOf {
    meta: TypeMeta,
    dispatch: Dispatch,
}

impl OneOf {
    pub fn dict(
        variants: IndexMap<String, Arc<dyn SchemaType>>,
        load_hint: impl Fn(&JsonValue) -> Option<String> + Send + Sync + 'static,
        dump_hint: impl Fn(&Value) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        Self {
            meta: TypeMeta::default(),
            dispatch: Dispatch::Dict {
                variants,
                load_hint: Arc::new(load_hint),
                dump_hint: Arc::new(dump_hint),
            },
        }
    }

    pub fn list(variants: Vec<Arc<dyn SchemaType>>) -> Self {
        Self {
            meta: TypeMeta::default(),
            dispatch: Dispatch::List(variants),
        }
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

impl SchemaType for OneOf {
    fn name(&self) -> Option<&str> {
        self.meta.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.meta.description.as_deref()
    }

    fn validators(&self) -> &[Arc<ValueValidator>] {
        &self.meta.validators
    }

    fn _load(&self, data: &JsonValue, ctx: &Context) -> Result<Value, SchemaError> {
        match &self.dispatch {
            // Dictionary form: "emits precise per-variant errors" — an
            // unrecognized tag is the one generic message, but a known
            // tag's own structural/validator failure propagates as-is.
            Dispatch::Dict {
                variants,
                load_hint,
                ..
            } => {
                let tag = load_hint(data).ok_or_else(SchemaError::polymorphic_mismatch)?;
                let variant = variants
                    .get(&tag)
                    .ok_or_else(SchemaError::polymorphic_mismatch)?;
                variant.load(data, ctx)
            }
            // List form: try each in order, return the first success;
            // "on error in every branch, emit a leaf message 'Invalid
            // data'" (spec §4.8) — the generic tradeoff is intentional.
            Dispatch::List(variants) => {
                for variant in variants {
                    if let Ok(value) = variant.load(data, ctx) {
                        return Ok(value);
                    }
                }
                Err(SchemaError::polymorphic_mismatch())
            }
        }
    }

    fn _dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        match &self.dispatch {
            Dispatch::Dict {
                variants,
                dump_hint,
                ..
            } => {
                let tag = dump_hint(value).ok_or_else(SchemaError::polymorphic_mismatch)?;
                let variant = variants
                    .get(&tag)
                    .ok_or_else(SchemaError::polymorphic_mismatch)?;
                variant.dump(value, ctx)
            }
            // "Dump symmetrically — the first branch whose `dump` does
            // not raise wins" (spec §4.8; the ambiguous-match behavior
            // this implies is Open Question #1, resolved in DESIGN.md).
            Dispatch::List(variants) => {
                for variant in variants {
                    if let Ok(dumped) = variant.dump(value, ctx) {
                        return Ok(dumped);
                    }
                }
                Err(SchemaError::polymorphic_mismatch())
            }
        }
    }
}

/// Prebuilt `load_hint`: reads `key` from the external mapping and,
/// if `mapping` is given, remaps the raw tag value through it (spec
/// §4.8, "returns a `load_hint` that reads a field from the external
/// mapping and optionally remaps it").
pub fn dict_value_hint(
    key: impl Into<String>,
    mapping: Option<IndexMap<String, String>>,
) -> impl Fn(&JsonValue) -> Option<String> + Send + Sync + 'static {
    let key = key.into();
    move |data: &JsonValue| {
        let raw = data.as_object()?.get(&key)?.as_str()?.to_string();
        Some(match &mapping {
            Some(remap) => remap.get(&raw).cloned().unwrap_or(raw),
            None => raw,
        })
    }
}
