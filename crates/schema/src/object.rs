//! `Object<O>` (spec §4.7): the record codec. Base composition, lazy
//! cached field resolution, constructor dispatch, fresh load, partial
//! in-place update (`load_into`), and `validate_for`.
//!
//! `O` is the application record type this schema constructs and reads
//! from. `Object<O>` is the one generic kernel type; it still implements
//! the non-generic [`SchemaType`] (SPEC_FULL.md, "`SchemaType` trait
//! object composition") by type-erasing a constructed `O` into
//! [`Value::Record`] — this is what lets an `Object<Person>` sit inside a
//! `List`, a `OneOf` variant, or a `TypeRegistry` slot next to primitives.

use std::any::Any;
use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::context::Context;
use crate::error::{ErrorBuilder, SchemaError};
use crate::field::Field;
use crate::schema_type::{run_validators, SchemaType, ValueValidator};
use crate::value::Value;

type Constructor<O> = Arc<dyn Fn(IndexMap<String, Value>) -> Result<O, SchemaError> + Send + Sync>;

/// Resolved, cached state produced by composing `bases` with the
/// object's own fields and options (spec §4.7, "lazy and cached").
struct Resolved<O> {
    fields: IndexMap<String, Arc<dyn Field<O>>>,
    constructor: Constructor<O>,
    allow_extra_fields: bool,
    immutable: bool,
}

pub struct Object<O> {
    bases: Vec<Arc<Object<O>>>,
    own_fields: IndexMap<String, Arc<dyn Field<O>>>,
    only: Option<Vec<String>>,
    exclude: Vec<String>,
    constructor: Option<Constructor<O>>,
    allow_extra_fields: Option<bool>,
    immutable: Option<bool>,
    validators: Vec<Arc<ValueValidator>>,
    resolved: OnceLock<Resolved<O>>,
}

impl<O> Object<O> {
    pub fn builder() -> ObjectBuilder<O> {
        ObjectBuilder::new()
    }

    /// First value found by checking `self`, then each base in
    /// declaration order (recursively) — "the resulting options default
    /// to the nearest base providing them" (spec §4.7), read here as
    /// "nearest" = first in declaration order, own value always wins.
    fn resolve_opt<T: Clone>(&self, get: impl Fn(&Self) -> Option<T> + Copy) -> Option<T> {
        if let Some(value) = get(self) {
            return Some(value);
        }
        self.bases.iter().find_map(|base| base.resolve_opt(get))
    }

    fn resolve(&self) -> &Resolved<O> {
        self.resolved.get_or_init(|| {
            let mut fields: IndexMap<String, Arc<dyn Field<O>>> = IndexMap::new();
            for base in &self.bases {
                for (name, field) in &base.resolve().fields {
                    fields.insert(name.clone(), Arc::clone(field));
                }
            }
            if let Some(only) = &self.only {
                fields.retain(|name, _| only.iter().any(|kept| kept == name));
            }
            for excluded in &self.exclude {
                fields.shift_remove(excluded);
            }
            for (name, field) in &self.own_fields {
                fields.insert(name.clone(), Arc::clone(field));
            }
            tracing::trace!(fields = fields.len(), "Object field resolution cached");
            Resolved {
                fields,
                constructor: self
                    .resolve_opt(|o| o.constructor.clone())
                    .expect("Object must have a constructor, own or inherited from a base"),
                allow_extra_fields: self.resolve_opt(|o| o.allow_extra_fields).unwrap_or(false),
                immutable: self.resolve_opt(|o| o.immutable).unwrap_or(false),
            }
        })
    }

    /// Builds the merged field map for `load_into`/`validate_for`:
    /// present external keys are freshly loaded, absent ones fall back to
    /// `target`'s current value. Returns the merged map (for whole-object
    /// validation / reconstruction) and the subset that was freshly
    /// loaded (for in-place `Field::write`).
    fn merge_fields(
        &self,
        target: &O,
        external: &serde_json::Map<String, JsonValue>,
        ctx: &Context,
    ) -> Result<(IndexMap<String, Value>, IndexMap<String, Value>), SchemaError> {
        let resolved = self.resolve();
        let mut builder = ErrorBuilder::new();
        let mut merged = IndexMap::with_capacity(resolved.fields.len());
        let mut newly_loaded = IndexMap::new();
        for (name, field) in &resolved.fields {
            match external.get(name) {
                Some(json) => match field.field_type().load(json, ctx) {
                    Ok(value) if value.is_missing() => {}
                    Ok(value) => {
                        merged.insert(name.clone(), value.clone());
                        newly_loaded.insert(name.clone(), value);
                    }
                    Err(error) => builder.add_tree(name, error),
                },
                None => {
                    let current = field.read(target, ctx);
                    if !current.is_missing() {
                        merged.insert(name.clone(), current);
                    }
                }
            }
        }
        builder.raise_errors()?;
        Ok((merged, newly_loaded))
    }
}

impl<O: Send + Sync + 'static> Object<O> {
    /// Typed `load` (spec §4.7, "Load (fresh construction)"). Delegates
    /// to the generic [`SchemaType::load`] pipeline (so object-level
    /// validators, which see the constructed [`Value::Record`], run
    /// exactly once) and downcasts the result back to `O`.
    pub fn load_typed(&self, external: &JsonValue, ctx: &Context) -> Result<O, SchemaError> {
        match SchemaType::load(self, external, ctx)? {
            Value::Record(record) => {
                let record = Arc::downcast::<O>(record)
                    .map_err(|_| SchemaError::leaf("internal: record type mismatch"))?;
                Ok(Arc::try_unwrap(record)
                    .unwrap_or_else(|_| panic!("Object::load_typed: value retained elsewhere")))
            }
            _ => unreachable!("Object::_load always produces Value::Record"),
        }
    }

    /// Typed `dump` (spec §4.7, "Dump").
    pub fn dump_typed(&self, object: &O, ctx: &Context) -> Result<JsonValue, SchemaError> {
        let resolved = self.resolve();
        let mut out = serde_json::Map::with_capacity(resolved.fields.len());
        for (name, field) in &resolved.fields {
            let raw = field.read(object, ctx);
            if let Some(json) = field.field_type().dump(&raw, ctx)? {
                out.insert(name.clone(), json);
            }
        }
        Ok(JsonValue::Object(out))
    }

    /// `load_into` (spec §4.7, "Load into (partial update)"): loads only
    /// the fields present in `external`, runs whole-object validators
    /// against the merged view, then either mutates `target` field by
    /// field (default) or reconstructs and replaces it (`immutable`).
    /// `DumpOnly` fields always load to `Value::Missing` and are
    /// therefore silently skipped here with no special-case code.
    pub fn load_into(
        &self,
        target: &mut O,
        external: &JsonValue,
        ctx: &Context,
    ) -> Result<(), SchemaError> {
        let Some(map) = external.as_object() else {
            return Err(SchemaError::not_mapping());
        };
        let resolved = self.resolve();
        let (merged, newly_loaded) = self.merge_fields(target, map, ctx)?;
        let merged_object = (resolved.constructor)(merged)?;
        let merged_value: Arc<dyn Any + Send + Sync> = Arc::new(merged_object);
        run_validators(&self.validators, &Value::Record(Arc::clone(&merged_value)))?;

        if resolved.immutable {
            let merged_object = Arc::downcast::<O>(merged_value)
                .map_err(|_| SchemaError::leaf("internal: record type mismatch"))?;
            *target = Arc::try_unwrap(merged_object)
                .unwrap_or_else(|_| panic!("Object::load_into: value retained elsewhere"));
        } else {
            for (name, value) in newly_loaded {
                if let Some(field) = resolved.fields.get(&name) {
                    field.write(target, value);
                }
            }
        }
        Ok(())
    }

    /// `validate_for` (spec §4.7): same merge-and-validate as
    /// `load_into`, but reports instead of mutating.
    pub fn validate_for(
        &self,
        target: &O,
        external: &JsonValue,
        ctx: &Context,
    ) -> Option<SchemaError> {
        let map = external.as_object()?;
        let (merged, _) = match self.merge_fields(target, map, ctx) {
            Ok(merged) => merged,
            Err(error) => return Some(error),
        };
        let resolved = self.resolve();
        let merged_object = match (resolved.constructor)(merged) {
            Ok(object) => object,
            Err(error) => return Some(error),
        };
        let merged_value = Value::Record(Arc::new(merged_object));
        run_validators(&self.validators, &merged_value).err()
    }
}

impl<O: Send + Sync + 'static> SchemaType for Object<O> {
    fn validators(&self) -> &[Arc<ValueValidator>] {
        &self.validators
    }

    fn _load(&self, data: &JsonValue, ctx: &Context) -> Result<Value, SchemaError> {
        // Spec §4.3: "a `Null` external value is equivalent to `MISSING`
        // for purposes of required-field detection" — an absent nested
        // Object (no `Optional` wrapper) must report "Value is required",
        // not the unrelated "value should be mapping".
        if data.is_null() {
            return Err(SchemaError::required());
        }
        let Some(map) = data.as_object() else {
            return Err(SchemaError::not_mapping());
        };
        let resolved = self.resolve();
        let mut builder = ErrorBuilder::new();
        let mut loaded = IndexMap::with_capacity(resolved.fields.len());
        for (name, field) in &resolved.fields {
            let raw = map.get(name).cloned().unwrap_or(JsonValue::Null);
            match field.field_type().load(&raw, ctx) {
                Ok(value) => {
                    if !value.is_missing() {
                        loaded.insert(name.clone(), value);
                    }
                }
                Err(error) => builder.add_tree(name, error),
            }
        }
        if !resolved.allow_extra_fields {
            for key in map.keys() {
                if !resolved.fields.contains_key(key) {
                    builder.add_error(key, "unknown field");
                }
            }
        }
        builder.raise_errors()?;
        let object = (resolved.constructor)(loaded)?;
        Ok(Value::Record(Arc::new(object)))
    }

    fn _dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        match value {
            Value::Missing => Ok(None),
            Value::Record(record) => {
                let Some(object) = record.downcast_ref::<O>() else {
                    return Err(SchemaError::leaf("internal: record type mismatch"));
                };
                Ok(Some(self.dump_typed(object, ctx)?))
            }
            _ => Err(SchemaError::not_mapping()),
        }
    }
}

pub struct ObjectBuilder<O> {
    bases: Vec<Arc<Object<O>>>,
    own_fields: IndexMap<String, Arc<dyn Field<O>>>,
    only: Option<Vec<String>>,
    exclude: Vec<String>,
    constructor: Option<Constructor<O>>,
    allow_extra_fields: Option<bool>,
    immutable: Option<bool>,
    validators: Vec<Arc<ValueValidator>>,
}

impl<O> ObjectBuilder<O> {
    pub fn new() -> Self {
        Self {
            bases: Vec::new(),
            own_fields: IndexMap::new(),
            only: None,
            exclude: Vec::new(),
            constructor: None,
            allow_extra_fields: None,
            immutable: None,
            validators: Vec::new(),
        }
    }

    #[must_use]
    pub fn base(mut self, base: Arc<Object<O>>) -> Self {
        self.bases.push(base);
        self
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field: impl Field<O> + 'static) -> Self {
        self.own_fields.insert(name.into(), Arc::new(field));
        self
    }

    /// Shortcut for a literal constant field — the one bare-value
    /// auto-wrap from spec §4.7 that transfers directly to Rust. A bare
    /// *type* does not auto-wrap to `AttributeField`: that would need an
    /// attribute accessor, which Rust has no reflection to synthesize, so
    /// callers build those with `AttributeField::new` and pass them to
    /// `.field(...)` explicitly. See DESIGN.md.
    #[must_use]
    pub fn constant(self, name: impl Into<String>, value: impl Into<Value>) -> Self
    where
        O: 'static,
    {
        let name = name.into();
        self.field(
            name.clone(),
            crate::field::ConstantField::new(name, value.into()),
        )
    }

    #[must_use]
    pub fn only(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.only = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn exclude(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exclude = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn constructor(
        mut self,
        constructor: impl Fn(IndexMap<String, Value>) -> Result<O, SchemaError> + Send + Sync + 'static,
    ) -> Self {
        self.constructor = Some(Arc::new(constructor));
        self
    }

    #[must_use]
    pub fn allow_extra_fields(mut self, allow: bool) -> Self {
        self.allow_extra_fields = Some(allow);
        self
    }

    #[must_use]
    pub fn immutable(mut self, immutable: bool) -> Self {
        self.immutable = Some(immutable);
        self
    }

    #[must_use]
    pub fn validator(mut self, validator: impl nebula_validator::core::Validate<Input = Value> + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    pub fn build(self) -> Object<O> {
        Object {
            bases: self.bases,
            own_fields: self.own_fields,
            only: self.only,
            exclude: self.exclude,
            constructor: self.constructor,
            allow_extra_fields: self.allow_extra_fields,
            immutable: self.immutable,
            validators: self.validators,
            resolved: OnceLock::new(),
        }
    }
}

impl<O> Default for ObjectBuilder<O> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::AttributeField;
    use crate::types::primitive::{Integer, StringType};

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: String,
        age: i64,
    }

    fn person_schema() -> Object<Person> {
        Object::builder()
            .field(
                "name",
                AttributeField::new(
                    "name",
                    StringType::new(),
                    |p: &Person| Value::String(p.name.clone()),
                    |p: &mut Person, v: Value| {
                        if let Some(s) = v.as_str() {
                            p.name = s.to_string();
                        }
                    },
                ),
            )
            .field(
                "age",
                AttributeField::new(
                    "age",
                    Integer::new(),
                    |p: &Person| Value::Int(p.age),
                    |p: &mut Person, v: Value| {
                        if let Some(i) = v.as_i64() {
                            p.age = i;
                        }
                    },
                ),
            )
            .constructor(|mut fields| {
                let name = fields
                    .shift_remove("name")
                    .and_then(|v| v.as_str().map(str::to_string))
                    .ok_or_else(|| SchemaError::leaf("name").under("name"))?;
                let age = fields
                    .shift_remove("age")
                    .and_then(|v| v.as_i64())
                    .ok_or_else(|| SchemaError::leaf("age").under("age"))?;
                Ok(Person { name, age })
            })
            .build()
    }

    fn ctx() -> Context {
        Context::new()
    }

    #[test]
    fn person_round_trip() {
        let schema = person_schema();
        let json = serde_json::json!({"name": "John", "age": 38});
        let person = schema.load_typed(&json, &ctx()).unwrap();
        assert_eq!(
            person,
            Person {
                name: "John".to_string(),
                age: 38
            }
        );
        assert_eq!(schema.dump_typed(&person, &ctx()).unwrap(), json);
    }

    #[test]
    fn missing_required_field_reports_under_field_name() {
        let schema = person_schema();
        let json = serde_json::json!({"name": "John"});
        let error = schema.load_typed(&json, &ctx()).unwrap_err();
        assert_eq!(error.to_json()["age"], "Value is required");
    }

    #[test]
    fn unknown_field_is_rejected_by_default() {
        let schema = person_schema();
        let json = serde_json::json!({"name": "John", "age": 38, "bogus": true});
        let error = schema.load_typed(&json, &ctx()).unwrap_err();
        assert_eq!(error.to_json()["bogus"], "unknown field");
    }

    #[test]
    fn load_into_touches_only_present_fields() {
        let schema = person_schema();
        let mut person = Person {
            name: "John".to_string(),
            age: 38,
        };
        schema
            .load_into(&mut person, &serde_json::json!({"age": 39}), &ctx())
            .unwrap();
        assert_eq!(person.name, "John");
        assert_eq!(person.age, 39);
    }

    #[test]
    fn exclude_filters_inherited_fields_but_not_own() {
        let base = Arc::new(person_schema());
        let derived: Object<Person> = Object::builder()
            .base(Arc::clone(&base))
            .exclude(["age"])
            .constructor(|mut fields| {
                let name = fields
                    .shift_remove("name")
                    .and_then(|v| v.as_str().map(str::to_string))
                    .unwrap_or_default();
                Ok(Person { name, age: 0 })
            })
            .build();
        let json = serde_json::json!({"name": "Jane"});
        let person = derived.load_typed(&json, &ctx()).unwrap();
        assert_eq!(person.name, "Jane");
        assert_eq!(person.age, 0);
    }
}
