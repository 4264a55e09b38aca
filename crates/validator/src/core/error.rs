//! The error type shared by every validator and combinator in this crate.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

/// Most validators attach zero or one param (`min`, `max`, `pattern`, ...);
/// inlining a couple avoids a heap allocation for the common case.
pub type Params = SmallVec<[(String, String); 2]>;

/// A single validation failure.
///
/// Unlike most error types in the workspace this is a plain struct, not a
/// `thiserror` enum: its shape (`code`/`message`/`field`/`params`/`nested`) is
/// itself the product callers consume, not a wrapper around some other
/// library's error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub code: Cow<'static, str>,
    pub message: String,
    pub field: Option<String>,
    pub params: Params,
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Params::new(),
            nested: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_nested(mut self, nested: Vec<ValidationError>) -> Self {
        self.nested = nested;
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    // Convenience constructors used by the built-in validators/combinators.

    pub fn required(field: impl Into<String>) -> Self {
        Self::new("required", "value is required").with_field(field)
    }

    pub fn type_mismatch(field: impl Into<String>, expected: &str) -> Self {
        Self::new("type_mismatch", format!("expected {expected}")).with_field(field)
    }

    pub fn min_length(field: impl Into<String>, min: usize, actual: usize) -> Self {
        Self::new(
            "min_length",
            format!("must be at least {min} characters long, got {actual}"),
        )
        .with_field(field)
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    pub fn max_length(field: impl Into<String>, max: usize, actual: usize) -> Self {
        Self::new(
            "max_length",
            format!("must be at most {max} characters long, got {actual}"),
        )
        .with_field(field)
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "[{}] {}: {}", self.code, field, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

impl std::error::Error for ValidationError {}
