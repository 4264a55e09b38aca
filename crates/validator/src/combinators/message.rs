//! WITH_MESSAGE / WITH_CODE combinators - override a validator's failure text

use crate::core::{Validate, ValidationError, ValidatorMetadata};
use std::borrow::Cow;

/// Replaces the inner validator's error message on failure, keeping its
/// code, field, params and nested errors.
pub struct WithMessage<V> {
    inner: V,
    message: String,
}

impl<V> WithMessage<V> {
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }
}

impl<V: Validate> Validate for WithMessage<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner
            .validate(input)
            .map_err(|err| err.with_message(self.message.clone()))
    }

    fn metadata(&self) -> ValidatorMetadata {
        self.inner.metadata()
    }
}

pub fn with_message<V: Validate>(inner: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(inner, message)
}

/// Replaces the inner validator's error code on failure.
pub struct WithCode<V> {
    inner: V,
    code: Cow<'static, str>,
}

impl<V> WithCode<V> {
    pub fn new(inner: V, code: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner,
            code: code.into(),
        }
    }
}

impl<V: Validate> Validate for WithCode<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|mut err| {
            err.code = self.code.clone();
            err
        })
    }

    fn metadata(&self) -> ValidatorMetadata {
        self.inner.metadata()
    }
}

pub fn with_code<V: Validate>(inner: V, code: impl Into<Cow<'static, str>>) -> WithCode<V> {
    WithCode::new(inner, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NonEmpty;
    impl Validate for NonEmpty {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.is_empty() {
                Err(ValidationError::new("non_empty", "must not be empty"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn with_message_overrides_text_only() {
        let v = with_message(NonEmpty, "Name is required");
        let err = v.validate("").unwrap_err();
        assert_eq!(err.message, "Name is required");
        assert_eq!(err.code.as_ref(), "non_empty");
    }

    #[test]
    fn with_code_overrides_code_only() {
        let v = with_code(NonEmpty, "MISSING_NAME");
        let err = v.validate("").unwrap_err();
        assert_eq!(err.code.as_ref(), "MISSING_NAME");
        assert_eq!(err.message, "must not be empty");
    }
}
