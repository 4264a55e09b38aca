//! Ordered sequence, fixed-arity tuple, and the two mapping shapes (spec
//! §4.4): "mapping-with-fixed-keys" ([`FixedDict`]) and
//! "mapping-with-uniform-values" ([`Dict`]).

use std::sync::Arc;

use indexmap::IndexMap;
use nebula_validator::core::Validate;
use serde_json::Value as JsonValue;

use crate::context::Context;
use crate::error::{ErrorBuilder, SchemaError};
use crate::schema_type::{dump_required, SchemaType, TypeMeta, ValueValidator};
use crate::value::{json_kind, Value};

/// `List(T)`: an ordered sequence, loaded element-wise. Spec §4.4: "maps
/// each element through `T.load`, continuing on error and reporting a
/// nested error keyed by integer index. Strings are rejected even though
/// they are iterable."
pub struct List {
    meta: TypeMeta,
    item: Arc<dyn SchemaType>,
}

impl List {
    pub fn new(item: Arc<dyn SchemaType>) -> Self {
        Self {
            meta: TypeMeta::default(),
            item,
        }
    }

    pub fn of(item: impl SchemaType + 'static) -> Self {
        Self::new(Arc::new(item))
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

impl SchemaType for List {
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
        let JsonValue::Array(items) = data else {
            return Err(SchemaError::type_mismatch("array", json_kind(data)));
        };
        let mut builder = ErrorBuilder::new();
        let mut loaded = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match self.item.load(item, ctx) {
                Ok(value) => loaded.push(value),
                Err(error) => builder.add_tree(&index.to_string(), error),
            }
        }
        builder.raise_errors()?;
        Ok(Value::Seq(loaded))
    }

    fn _dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        let Some(items) = value.as_seq() else {
            if value.is_missing() {
                return Err(SchemaError::required());
            }
            return Err(SchemaError::type_mismatch("array", value.kind()));
        };
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            out.push(
                dump_required(self.item.as_ref(), item, ctx)
                    .map_err(|e| e.under(index.to_string()))?,
            );
        }
        Ok(Some(JsonValue::Array(out)))
    }
}

/// `Tuple(T1,...,Tn)`: fixed arity, one child type per slot.
pub struct Tuple {
    meta: TypeMeta,
    slots: Vec<Arc<dyn SchemaType>>,
}

impl Tuple {
    pub fn new(slots: Vec<Arc<dyn SchemaType>>) -> Self {
        Self {
            meta: TypeMeta::default(),
            slots,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.meta = self.meta.named(name);
        self
    }
}

impl SchemaType for Tuple {
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
        let JsonValue::Array(items) = data else {
            return Err(SchemaError::type_mismatch("array", json_kind(data)));
        };
        if items.len() != self.slots.len() {
            return Err(SchemaError::wrong_arity(self.slots.len(), items.len()));
        }
        let mut builder = ErrorBuilder::new();
        let mut loaded = Vec::with_capacity(items.len());
        for (index, (slot, item)) in self.slots.iter().zip(items).enumerate() {
            match slot.load(item, ctx) {
                Ok(value) => loaded.push(value),
                Err(error) => builder.add_tree(&index.to_string(), error),
            }
        }
        builder.raise_errors()?;
        Ok(Value::Tuple(loaded))
    }

    fn _dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        let Some(items) = value.as_seq() else {
            if value.is_missing() {
                return Err(SchemaError::required());
            }
            return Err(SchemaError::type_mismatch("tuple", value.kind()));
        };
        if items.len() != self.slots.len() {
            return Err(SchemaError::wrong_arity(self.slots.len(), items.len()));
        }
        let mut out = Vec::with_capacity(items.len());
        for (index, (slot, item)) in self.slots.iter().zip(items).enumerate() {
            out.push(
                dump_required(slot.as_ref(), item, ctx).map_err(|e| e.under(index.to_string()))?,
            );
        }
        Ok(Some(JsonValue::Array(out)))
    }
}

/// `Dict(values=T, keys=K?)`: any keys, uniform value type, optional key
/// validation. Spec §4.4: "accepts any keys (optionally validated by the
/// key type)".
pub struct Dict {
    meta: TypeMeta,
    values: Arc<dyn SchemaType>,
    keys: Option<Arc<dyn SchemaType>>,
}

impl Dict {
    pub fn new(values: Arc<dyn SchemaType>) -> Self {
        Self {
            meta: TypeMeta::default(),
            values,
            keys: None,
        }
    }

    pub fn of(values: impl SchemaType + 'static) -> Self {
        Self::new(Arc::new(values))
    }

    #[must_use]
    pub fn with_key_type(mut self, keys: Arc<dyn SchemaType>) -> Self {
        self.keys = Some(keys);
        self
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.meta = self.meta.named(name);
        self
    }
}

impl SchemaType for Dict {
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
        let JsonValue::Object(map) = data else {
            return Err(SchemaError::type_mismatch("object", json_kind(data)));
        };
        let mut builder = ErrorBuilder::new();
        let mut loaded = IndexMap::with_capacity(map.len());
        for (key, value) in map {
            if let Some(key_type) = &self.keys {
                if let Err(error) = key_type.load(&JsonValue::String(key.clone()), ctx) {
                    builder.add_tree(key, error);
                    continue;
                }
            }
            match self.values.load(value, ctx) {
                Ok(value) => {
                    loaded.insert(key.clone(), value);
                }
                Err(error) => builder.add_tree(key, error),
            }
        }
        builder.raise_errors()?;
        Ok(Value::Map(loaded))
    }

    fn _dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        let Some(map) = value.as_map() else {
            if value.is_missing() {
                return Err(SchemaError::required());
            }
            return Err(SchemaError::type_mismatch("object", value.kind()));
        };
        let mut out = serde_json::Map::with_capacity(map.len());
        for (key, item) in map {
            let dumped = dump_required(self.values.as_ref(), item, ctx)
                .map_err(|e| e.under(key.clone()))?;
            out.insert(key.clone(), dumped);
        }
        Ok(Some(JsonValue::Object(out)))
    }
}

/// `Dict({k1:T1,...})` (fixed): every declared key is required, and no
/// other keys are accepted.
pub struct FixedDict {
    meta: TypeMeta,
    fields: IndexMap<String, Arc<dyn SchemaType>>,
}

impl FixedDict {
    pub fn new(fields: IndexMap<String, Arc<dyn SchemaType>>) -> Self {
        Self {
            meta: TypeMeta::default(),
            fields,
        }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.meta = self.meta.named(name);
        self
    }
}

impl SchemaType for FixedDict {
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
        let JsonValue::Object(map) = data else {
            return Err(SchemaError::not_mapping());
        };
        let mut builder = ErrorBuilder::new();
        let mut loaded = IndexMap::with_capacity(self.fields.len());
        for (key, field_type) in &self.fields {
            let raw = map.get(key).cloned().unwrap_or(JsonValue::Null);
            match field_type.load(&raw, ctx) {
                Ok(value) => {
                    loaded.insert(key.clone(), value);
                }
                Err(error) => builder.add_tree(key, error),
            }
        }
        for key in map.keys() {
            if !self.fields.contains_key(key) {
                builder.add_error(key, "unknown field");
            }
        }
        builder.raise_errors()?;
        Ok(Value::Map(loaded))
    }

    fn _dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        let Some(map) = value.as_map() else {
            if value.is_missing() {
                return Err(SchemaError::required());
            }
            return Err(SchemaError::type_mismatch("object", value.kind()));
        };
        let mut out = serde_json::Map::with_capacity(self.fields.len());
        for (key, field_type) in &self.fields {
            let item = map.get(key).unwrap_or(&Value::Missing);
            let dumped =
                dump_required(field_type.as_ref(), item, ctx).map_err(|e| e.under(key.clone()))?;
            out.insert(key.clone(), dumped);
        }
        Ok(Some(JsonValue::Object(out)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::primitive::{Integer, StringType};

    fn ctx() -> Context {
        Context::new()
    }

    #[test]
    fn list_continues_on_error_and_reports_by_index() {
        let list = List::of(Integer::new());
        let err = list
            .load(
                &JsonValue::Array(vec![JsonValue::from(1), JsonValue::String("oops".into())]),
                &ctx(),
            )
            .unwrap_err();
        assert_eq!(err.to_json()["1"], "expected integer, got string");
    }

    #[test]
    fn list_rejects_string_even_though_iterable() {
        let list = List::of(Integer::new());
        assert!(list.load(&JsonValue::String("abc".into()), &ctx()).is_err());
    }

    #[test]
    fn list_round_trip() {
        let list = List::of(Integer::new());
        let loaded = list
            .load(&JsonValue::Array(vec![JsonValue::from(1), JsonValue::from(2)]), &ctx())
            .unwrap();
        assert_eq!(
            list.dump(&loaded, &ctx()).unwrap(),
            Some(JsonValue::Array(vec![JsonValue::from(1), JsonValue::from(2)]))
        );
    }

    #[test]
    fn tuple_rejects_wrong_arity() {
        let tuple = Tuple::new(vec![Arc::new(StringType::new()), Arc::new(Integer::new())]);
        assert!(tuple
            .load(&JsonValue::Array(vec![JsonValue::String("a".into())]), &ctx())
            .is_err());
    }

    #[test]
    fn fixed_dict_requires_all_keys_and_rejects_extra() {
        let mut fields = IndexMap::new();
        fields.insert("name".to_string(), Arc::new(StringType::new()) as Arc<dyn SchemaType>);
        fields.insert("age".to_string(), Arc::new(Integer::new()) as Arc<dyn SchemaType>);
        let dict = FixedDict::new(fields);

        let missing_age = dict
            .load(
                &JsonValue::Object(
                    [("name".to_string(), JsonValue::String("John".into()))]
                        .into_iter()
                        .collect(),
                ),
                &ctx(),
            )
            .unwrap_err();
        assert_eq!(missing_age.to_json()["age"], "Value is required");

        let mut extra = serde_json::Map::new();
        extra.insert("name".to_string(), JsonValue::String("John".into()));
        extra.insert("age".to_string(), JsonValue::from(10));
        extra.insert("bogus".to_string(), JsonValue::Bool(true));
        let err = dict.load(&JsonValue::Object(extra), &ctx()).unwrap_err();
        assert_eq!(err.to_json()["bogus"], "unknown field");
    }

    #[test]
    fn dict_uniform_accepts_any_keys() {
        let dict = Dict::of(Integer::new());
        let mut obj = serde_json::Map::new();
        obj.insert("a".to_string(), JsonValue::from(1));
        obj.insert("b".to_string(), JsonValue::from(2));
        let loaded = dict.load(&JsonValue::Object(obj), &ctx()).unwrap();
        assert!(loaded.as_map().unwrap().contains_key("a"));
    }
}
