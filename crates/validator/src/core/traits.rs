//! The core validator trait.

use super::{ValidationError, ValidatorMetadata};

/// A predicate over one input type.
///
/// `Input` is `?Sized` so validators can run directly against borrowed
/// unsized data (`str`, `[T]`) without forcing an owned copy.
///
/// Validators are expected to be cheap, pure, and reentrant: the same
/// validator must be safe to call concurrently from multiple threads once
/// constructed.
pub trait Validate: Send + Sync {
    type Input: ?Sized;

    /// Runs the predicate. `Ok(())` on success, `Err` with the reason on
    /// failure.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Descriptive metadata this validator reports about itself.
    /// Combinators merge their children's metadata rather than hand
    /// writing their own.
    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::default()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn metadata(&self) -> ValidatorMetadata {
        (**self).metadata()
    }
}

impl<V: Validate + ?Sized> Validate for std::sync::Arc<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }

    fn metadata(&self) -> ValidatorMetadata {
        (**self).metadata()
    }
}

/// Fluent combinator methods available on every [`Validate`] implementor.
pub trait ValidateExt: Validate {
    fn and<R>(self, right: R) -> crate::combinators::And<Self, R>
    where
        Self: Sized,
        R: Validate<Input = Self::Input>,
    {
        crate::combinators::And::new(self, right)
    }

    fn or<R>(self, right: R) -> crate::combinators::Or<Self, R>
    where
        Self: Sized,
        R: Validate<Input = Self::Input>,
    {
        crate::combinators::Or::new(self, right)
    }

    fn not(self) -> crate::combinators::Not<Self>
    where
        Self: Sized,
    {
        crate::combinators::Not::new(self)
    }

    fn when<C>(self, condition: C) -> crate::combinators::When<Self, C>
    where
        Self: Sized,
        C: crate::combinators::Predicate<Self::Input>,
    {
        crate::combinators::When::new(self, condition)
    }

    fn unless<C>(self, condition: C) -> crate::combinators::When<Self, crate::combinators::Negated<C>>
    where
        Self: Sized,
        C: crate::combinators::Predicate<Self::Input>,
    {
        crate::combinators::When::new(self, crate::combinators::Negated(condition))
    }

    fn cached(self) -> crate::combinators::Cached<Self>
    where
        Self: Sized,
        Self::Input: std::hash::Hash,
    {
        crate::combinators::Cached::new(self)
    }

    fn with_message(self, message: impl Into<String>) -> crate::combinators::WithMessage<Self>
    where
        Self: Sized,
    {
        crate::combinators::WithMessage::new(self, message)
    }

    fn with_code(self, code: impl Into<std::borrow::Cow<'static, str>>) -> crate::combinators::WithCode<Self>
    where
        Self: Sized,
    {
        crate::combinators::WithCode::new(self, code)
    }
}

impl<V: Validate + ?Sized> ValidateExt for V {}
