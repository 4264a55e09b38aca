//! WHEN / UNLESS combinators - conditional validation

use crate::core::{Validate, ValidationError, ValidatorMetadata};

/// A boolean predicate over a borrowed input. Implemented for any
/// `Fn(&T) -> bool` closure and for [`Negated`], so `when`/`unless` share
/// one combinator type.
pub trait Predicate<T: ?Sized>: Send + Sync {
    fn check(&self, input: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    fn check(&self, input: &T) -> bool {
        self(input)
    }
}

/// Negates a wrapped predicate. Used by [`unless`] and
/// [`crate::core::ValidateExt::unless`].
pub struct Negated<C>(pub(crate) C);

impl<T: ?Sized, C> Predicate<T> for Negated<C>
where
    C: Predicate<T>,
{
    fn check(&self, input: &T) -> bool {
        !self.0.check(input)
    }
}

/// Runs the inner validator only when `condition` holds for the input;
/// otherwise passes trivially.
pub struct When<V, C> {
    inner: V,
    condition: C,
}

impl<V, C> When<V, C> {
    pub fn new(inner: V, condition: C) -> Self {
        Self { inner, condition }
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Predicate<V::Input>,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.condition.check(input) {
            self.inner.validate(input)
        } else {
            Ok(())
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        let inner_meta = self.inner.metadata();
        ValidatorMetadata {
            name: format!("When({})", inner_meta.name).into(),
            description: Some("conditionally applied validator".into()),
            ..inner_meta
        }
    }
}

pub fn when<V, C>(inner: V, condition: C) -> When<V, C>
where
    V: Validate,
    C: Predicate<V::Input>,
{
    When::new(inner, condition)
}

pub fn unless<V, C>(inner: V, condition: C) -> When<V, Negated<C>>
where
    V: Validate,
    C: Predicate<V::Input>,
{
    When::new(inner, Negated(condition))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MinLen(usize);

    impl Validate for MinLen {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.len() >= self.0 {
                Ok(())
            } else {
                Err(ValidationError::min_length("", self.0, input.len()))
            }
        }
    }

    #[test]
    fn when_skips_validator_if_condition_false() {
        let v = when(MinLen(10), |s: &str| s.starts_with("check:"));
        assert!(v.validate("short").is_ok());
        assert!(v.validate("check:short").is_err());
        assert!(v.validate("check:long enough").is_ok());
    }

    #[test]
    fn unless_skips_validator_if_condition_true() {
        let v = unless(MinLen(10), |s: &str| s == "bot");
        assert!(v.validate("bot").is_ok());
        assert!(v.validate("hi").is_err());
        assert!(v.validate("long enough value").is_ok());
    }
}
