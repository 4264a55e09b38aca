//! The opaque context object threaded through validation.
//!
//! A [`ValidationContext`] is a small type-keyed map plus a field-path
//! stack. It is the concrete type behind the kernel's "opaque context
//! value passed through every `load`/`dump`/`validate`" (the schema crate
//! re-exports this type as its own `Context`): the validator framework
//! never interprets the map's contents, it only carries them.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use super::{ValidationError, ValidatorMetadata};

/// A validator that additionally receives a [`ValidationContext`].
///
/// Kept distinct from [`super::Validate`] rather than folded into it: the
/// overwhelming majority of validators ignore context entirely, and a
/// mandatory second parameter would force every leaf validator and every
/// combinator to thread a value it never uses.
pub trait ContextualValidator: Send + Sync {
    type Input: ?Sized;

    fn validate_with_context(
        &self,
        input: &Self::Input,
        ctx: &ValidationContext,
    ) -> Result<(), ValidationError>;

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::default()
    }
}

#[derive(Clone, Default)]
pub struct ValidationContext {
    data: HashMap<String, Arc<dyn Any + Send + Sync>>,
    parent: Option<Arc<ValidationContext>>,
    path: Vec<String>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: Arc<ValidationContext>) -> Self {
        Self {
            data: HashMap::new(),
            parent: Some(parent),
            path: Vec::new(),
        }
    }

    /// Stores a value under `key`, shadowing (for this context only) any
    /// same-keyed value in a parent context.
    pub fn insert<T: Any + Send + Sync>(&mut self, key: impl Into<String>, value: T) {
        self.data.insert(key.into(), Arc::new(value));
    }

    /// Looks up `key`, checking this context and then each ancestor in
    /// turn. Returns `None` if absent, or present under a different type.
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<&T> {
        if let Some(value) = self.data.get(key) {
            return value.downcast_ref::<T>();
        }
        self.parent.as_ref().and_then(|p| p.get::<T>(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key) || self.parent.as_ref().is_some_and(|p| p.contains(key))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn push_field(&mut self, field: impl Into<String>) {
        self.path.push(field.into());
    }

    pub fn pop_field(&mut self) -> Option<String> {
        self.path.pop()
    }

    pub fn clear_path(&mut self) {
        self.path.clear();
    }

    pub fn field_path(&self) -> String {
        self.path.join(".")
    }

    /// Splits this context into an `Arc` snapshot (for a parent to hold
    /// on to) and a fresh child that inherits the snapshot's path and data
    /// but accumulates its own on top.
    pub fn child(&self) -> (Arc<ValidationContext>, ValidationContext) {
        let snapshot = Arc::new(self.clone());
        let mut child = ValidationContext::with_parent(snapshot.clone());
        child.path = self.path.clone();
        (snapshot, child)
    }
}

#[derive(Default)]
pub struct ValidationContextBuilder {
    ctx: ValidationContext,
}

impl ValidationContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with<T: Any + Send + Sync>(mut self, key: impl Into<String>, value: T) -> Self {
        self.ctx.insert(key, value);
        self
    }

    pub fn build(self) -> ValidationContext {
        self.ctx
    }
}
