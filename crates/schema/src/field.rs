//! The Field abstraction (spec §4.6): how one named slot of an `Object<O>`
//! is read for `dump` and written back for `load`/`load_into`.
//!
//! Spec §4.6 allows the `attribute`/`key`/`method` selector to be a
//! literal string *or* a callable of `(object, context) -> string`
//! ("computed names"). Rust has no runtime attribute reflection, so
//! there is no separate string-valued indirection to compute in the
//! first place — the getter/setter closures below already receive the
//! object at call time and can do whatever computation a "computed name"
//! would have driven. [`FunctionField`] is the general case of this: a
//! closure over the whole object. See DESIGN.md for the full note.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::context::Context;
use crate::schema_type::SchemaType;
use crate::types::modifier::Constant;
use crate::value::Value;

/// One named slot of an `Object<O>`. `write` is a no-op by default —
/// only [`AttributeField`] and [`IndexField`] have a load destination
/// (spec §4.6's table).
pub trait Field<O>: Send + Sync {
    fn name(&self) -> &str;
    fn field_type(&self) -> &Arc<dyn SchemaType>;

    /// Value to dump for this field — `Value::Missing` if the attribute
    /// is absent.
    fn read(&self, object: &O, ctx: &Context) -> Value;

    /// Writes an already-loaded value back onto `object`. No-op for
    /// field kinds without a load destination.
    fn write(&self, object: &mut O, value: Value) {
        let _ = (object, value);
    }
}

/// `AttributeField(T, attribute=...)`: dump source is a named attribute,
/// load destination is the same attribute.
pub struct AttributeField<O> {
    name: String,
    field_type: Arc<dyn SchemaType>,
    getter: Arc<dyn Fn(&O) -> Value + Send + Sync>,
    setter: Arc<dyn Fn(&mut O, Value) + Send + Sync>,
}

impl<O> AttributeField<O> {
    pub fn new(
        name: impl Into<String>,
        field_type: impl SchemaType + 'static,
        getter: impl Fn(&O) -> Value + Send + Sync + 'static,
        setter: impl Fn(&mut O, Value) + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            field_type: Arc::new(field_type),
            getter: Arc::new(getter),
            setter: Arc::new(setter),
        }
    }
}

impl<O: 'static> Field<O> for AttributeField<O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> &Arc<dyn SchemaType> {
        &self.field_type
    }

    fn read(&self, object: &O, _ctx: &Context) -> Value {
        (self.getter)(object)
    }

    fn write(&self, object: &mut O, value: Value) {
        (self.setter)(object, value);
    }
}

/// `IndexField(T, key=...)`: dump source is a mapping lookup by key, load
/// destination is the same key. Structurally identical to
/// [`AttributeField`] in Rust (both reduce to getter/setter closures);
/// kept as a distinct type for parity with spec §4.6's table and so call
/// sites read as "this slot is a map key, not a struct field".
pub struct IndexField<O>(AttributeField<O>);

impl<O> IndexField<O> {
    pub fn new(
        key: impl Into<String>,
        field_type: impl SchemaType + 'static,
        getter: impl Fn(&O) -> Value + Send + Sync + 'static,
        setter: impl Fn(&mut O, Value) + Send + Sync + 'static,
    ) -> Self {
        Self(AttributeField::new(key, field_type, getter, setter))
    }
}

impl<O: 'static> Field<O> for IndexField<O> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn field_type(&self) -> &Arc<dyn SchemaType> {
        self.0.field_type()
    }

    fn read(&self, object: &O, ctx: &Context) -> Value {
        self.0.read(object, ctx)
    }

    fn write(&self, object: &mut O, value: Value) {
        self.0.write(object, value);
    }
}

/// `MethodField(T, method=...)`: dump source calls a zero-arg method on
/// the object; no load destination.
pub struct MethodField<O> {
    name: String,
    field_type: Arc<dyn SchemaType>,
    method: Arc<dyn Fn(&O) -> Value + Send + Sync>,
}

impl<O> MethodField<O> {
    pub fn new(
        name: impl Into<String>,
        field_type: impl SchemaType + 'static,
        method: impl Fn(&O) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            field_type: Arc::new(field_type),
            method: Arc::new(method),
        }
    }
}

impl<O: 'static> Field<O> for MethodField<O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> &Arc<dyn SchemaType> {
        &self.field_type
    }

    fn read(&self, object: &O, _ctx: &Context) -> Value {
        (self.method)(object)
    }
}

/// `FunctionField(T, fn)`: dump source calls `fn(object)`; no load
/// destination. The general "compute however you like" field kind.
pub struct FunctionField<O> {
    name: String,
    field_type: Arc<dyn SchemaType>,
    function: Arc<dyn Fn(&O) -> Value + Send + Sync>,
}

impl<O> FunctionField<O> {
    pub fn new(
        name: impl Into<String>,
        field_type: impl SchemaType + 'static,
        function: impl Fn(&O) -> Value + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            field_type: Arc::new(field_type),
            function: Arc::new(function),
        }
    }
}

impl<O: 'static> Field<O> for FunctionField<O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> &Arc<dyn SchemaType> {
        &self.field_type
    }

    fn read(&self, object: &O, _ctx: &Context) -> Value {
        (self.function)(object)
    }
}

/// `ConstantField(T, value)`: dump source yields a fixed constant; no
/// load destination. Shortcut used automatically when a bare literal is
/// given as a field value in `Object`'s builder (spec §4.7).
pub struct ConstantField<O> {
    name: String,
    value: Value,
    field_type: Arc<dyn SchemaType>,
    _object: PhantomData<fn() -> O>,
}

impl<O> ConstantField<O> {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        Self {
            name: name.into(),
            field_type: Arc::new(Constant::new(value.clone())),
            value,
            _object: PhantomData,
        }
    }
}

impl<O: 'static> Field<O> for ConstantField<O> {
    fn name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> &Arc<dyn SchemaType> {
        &self.field_type
    }

    fn read(&self, _object: &O, _ctx: &Context) -> Value {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::primitive::{Integer, StringType};

    struct Person {
        name: String,
        age: i64,
    }

    #[test]
    fn attribute_field_reads_and_writes() {
        let field = AttributeField::new(
            "name",
            StringType::new(),
            |p: &Person| Value::String(p.name.clone()),
            |p: &mut Person, v: Value| {
                if let Some(s) = v.as_str() {
                    p.name = s.to_string();
                }
            },
        );
        let mut person = Person {
            name: "John".into(),
            age: 38,
        };
        let ctx = Context::new();
        assert_eq!(field.read(&person, &ctx), Value::String("John".into()));
        field.write(&mut person, Value::String("Jane".into()));
        assert_eq!(person.name, "Jane");
    }

    #[test]
    fn method_field_has_no_load_destination() {
        let field = MethodField::new("doubled_age", Integer::new(), |p: &Person| {
            Value::Int(p.age * 2)
        });
        let mut person = Person {
            name: "John".into(),
            age: 38,
        };
        let ctx = Context::new();
        assert_eq!(field.read(&person, &ctx), Value::Int(76));
        field.write(&mut person, Value::Int(999));
        assert_eq!(person.age, 38);
    }

    #[test]
    fn constant_field_always_yields_the_constant() {
        let field: ConstantField<Person> = ConstantField::new("kind", "person");
        let person = Person {
            name: "John".into(),
            age: 38,
        };
        let ctx = Context::new();
        assert_eq!(field.read(&person, &ctx), Value::String("person".into()));
    }
}
