//! Named, lazy forward references for cyclic schemas (spec §4.9).
//!
//! `TypeRegistry::get` returns a [`RegistryRef`] — a proxy `SchemaType`
//! that resolves to the registered target on first `load`/`dump`/
//! `validate` and forwards every subsequent call the same way. This is
//! what lets `Person` reference `registry.get("Book")` before `Book` is
//! added, "provided `B` is added before any `load`/`dump` runs" (spec
//! §4.9): the lookup itself is deferred to call time, not construction
//! time.

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use serde_json::Value as JsonValue;

use crate::context::Context;
use crate::error::SchemaError;
use crate::schema_type::{SchemaType, ValueValidator};
use crate::value::Value;

/// A name → type map. Cheap to clone (`Arc`-backed); clones share the
/// same underlying registrations, so a registry can be built once and
/// handed to every schema that needs to reference it.
#[derive(Clone, Default)]
pub struct TypeRegistry {
    types: Arc<DashMap<String, Arc<dyn SchemaType>>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `schema_type` under `name`, replacing any prior
    /// registration of the same name.
    pub fn add(&self, name: impl Into<String>, schema_type: impl SchemaType + 'static) {
        let name = name.into();
        tracing::debug!(name = %name, "TypeRegistry::add");
        self.types.insert(name, Arc::new(schema_type));
    }

    /// Returns a late-binding proxy for `name`. Does not look up `name`
    /// yet — see [`RegistryRef`].
    pub fn get(&self, name: impl Into<String>) -> RegistryRef {
        RegistryRef {
            registry: Arc::clone(&self.types),
            name: name.into(),
            resolved: OnceLock::new(),
        }
    }

    /// `true` if `name` has been registered. Mainly useful in tests and
    /// diagnostics; ordinary schema construction should go through
    /// [`TypeRegistry::get`] and let the proxy resolve lazily.
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }
}

/// A proxy type that forwards `name`/`description`/`validators`/
/// `_load`/`_dump` to whatever `TypeRegistry::get`'s target name
/// resolves to, resolving and caching it on first use.
///
/// Resolution is cached via `OnceLock` rather than re-looked-up on every
/// call: once a cyclic schema is in active use the registry is frozen in
/// practice (spec §5, "Schemas are logically immutable after
/// construction"), so repeated lookups would only pay `DashMap` overhead
/// for no benefit.
pub struct RegistryRef {
    registry: Arc<DashMap<String, Arc<dyn SchemaType>>>,
    name: String,
    resolved: OnceLock<Arc<dyn SchemaType>>,
}

impl RegistryRef {
    fn resolve(&self) -> Result<&Arc<dyn SchemaType>, SchemaError> {
        if let Some(target) = self.resolved.get() {
            return Ok(target);
        }
        let target = self.registry.get(&self.name).map(|entry| Arc::clone(entry.value())).ok_or_else(|| {
            SchemaError::leaf(format!("unresolved type reference: {}", self.name))
        })?;
        tracing::debug!(name = %self.name, "TypeRegistry proxy resolved");
        Ok(self.resolved.get_or_init(|| target))
    }
}

impl SchemaType for RegistryRef {
    fn name(&self) -> Option<&str> {
        self.resolved
            .get()
            .and_then(|t| t.name())
            .or(Some(self.name.as_str()))
    }

    fn description(&self) -> Option<&str> {
        self.resolved.get().and_then(|t| t.description())
    }

    fn validators(&self) -> &[Arc<ValueValidator>] {
        // Only observable once resolved — spec doesn't require validator
        // introspection on an unresolved proxy, and `load`/`dump` (the
        // operations that matter) resolve before needing this.
        match self.resolved.get() {
            Some(target) => target.validators(),
            None => &[],
        }
    }

    fn _load(&self, data: &JsonValue, ctx: &Context) -> Result<Value, SchemaError> {
        self.resolve()?._load(data, ctx)
    }

    fn _dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        self.resolve()?._dump(value, ctx)
    }

    fn load(&self, data: &JsonValue, ctx: &Context) -> Result<Value, SchemaError> {
        self.resolve()?.load(data, ctx)
    }

    fn dump(&self, value: &Value, ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        self.resolve()?.dump(value, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::AttributeField;
    use crate::object::Object;
    use crate::types::container::List;
    use crate::types::modifier::Optional;
    use crate::types::primitive::StringType;

    fn ctx() -> Context {
        Context::new()
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Person {
        name: String,
        books: Vec<Book>,
    }

    #[derive(Debug, Clone, PartialEq, Default)]
    struct Book {
        title: String,
        author: Option<Person>,
    }

    /// Builds the `Person <-> Book` mutual-reference schema via a shared
    /// registry (spec §8 seed scenario 6): `Person.books: List(Book
    /// excluding author)`, `Book.author: Optional(Person excluding books)`.
    fn cyclic_registry() -> TypeRegistry {
        let registry = TypeRegistry::new();

        // `Optional`, not a bare reference: a book with no recorded author
        // must round-trip, and an absent nested Object load-side is MISSING
        // (spec §4.3), not a mapping.
        let book_author = AttributeField::new(
            "author",
            Optional::of(registry.get("Person")),
            |b: &Book| match &b.author {
                Some(p) => Value::from(Arc::new(p.clone())),
                None => Value::Missing,
            },
            |b: &mut Book, v: Value| {
                b.author = v.as_record::<Person>().cloned();
            },
        );
        let book_title = AttributeField::new(
            "title",
            StringType::new(),
            |b: &Book| Value::String(b.title.clone()),
            |b: &mut Book, v: Value| {
                if let Some(s) = v.as_str() {
                    b.title = s.to_string();
                }
            },
        );
        let book = Object::<Book>::builder()
            .field("title", book_title)
            .field("author", book_author)
            .constructor(|mut fields| {
                Ok(Book {
                    title: fields
                        .shift_remove("title")
                        .and_then(|v| v.as_str().map(str::to_string))
                        .unwrap_or_default(),
                    author: fields.shift_remove("author").and_then(|v| v.as_record::<Person>().cloned()),
                })
            })
            .build();
        registry.add("Book", book);

        let person_books = AttributeField::new(
            "books",
            List::of(registry.get("Book")),
            |p: &Person| {
                Value::Seq(
                    p.books
                        .iter()
                        .map(|b| Value::from(Arc::new(b.clone())))
                        .collect(),
                )
            },
            |p: &mut Person, v: Value| {
                if let Some(items) = v.as_seq() {
                    p.books = items.iter().filter_map(|i| i.as_record::<Book>().cloned()).collect();
                }
            },
        );
        let person_name = AttributeField::new(
            "name",
            StringType::new(),
            |p: &Person| Value::String(p.name.clone()),
            |p: &mut Person, v: Value| {
                if let Some(s) = v.as_str() {
                    p.name = s.to_string();
                }
            },
        );
        let person = Object::<Person>::builder()
            .field("name", person_name)
            .field("books", person_books)
            .constructor(|mut fields| {
                Ok(Person {
                    name: fields
                        .shift_remove("name")
                        .and_then(|v| v.as_str().map(str::to_string))
                        .unwrap_or_default(),
                    books: fields
                        .shift_remove("books")
                        .and_then(|v| v.as_seq().map(|items| {
                            items.iter().filter_map(|i| i.as_record::<Book>().cloned()).collect()
                        }))
                        .unwrap_or_default(),
                })
            })
            .build();
        registry.add("Person", person);

        registry
    }

    #[test]
    fn registering_book_before_access_resolves_cross_reference() {
        let registry = cyclic_registry();
        let person_type = registry.get("Person");

        let json = serde_json::json!({
            "name": "Jane",
            "books": [{"title": "Rust in Action"}],
        });
        let loaded = person_type.load(&json, &ctx()).unwrap();
        let person = loaded.as_record::<Person>().unwrap();
        assert_eq!(person.name, "Jane");
        assert_eq!(person.books.len(), 1);
        assert_eq!(person.books[0].title, "Rust in Action");

        let dumped = person_type.dump(&loaded, &ctx()).unwrap().unwrap();
        assert_eq!(dumped["name"], "Jane");
        assert_eq!(dumped["books"][0]["title"], "Rust in Action");
    }

    #[test]
    fn access_before_registration_fails_only_when_exercised() {
        let registry = TypeRegistry::new();
        // Registry access itself never fails — only resolving does.
        let proxy = registry.get("Nope");
        let err = proxy.load(&JsonValue::Null, &ctx()).unwrap_err();
        assert!(err.to_json().to_string().contains("unresolved type reference"));
    }
}
