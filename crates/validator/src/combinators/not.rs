//! NOT combinator - negates a validator

use crate::core::{Validate, ValidationError, ValidatorMetadata};
use std::borrow::Cow;

/// Inverts a validator: passes where the inner validator fails, and vice
/// versa. The failure message is generic since the inner validator's
/// success carries no reason to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    inner: V,
}

impl<V> Not<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &V {
        &self.inner
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_passed",
                "value must NOT pass the inner validator",
            )),
            Err(_) => Ok(()),
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        let inner_meta = self.inner.metadata();
        ValidatorMetadata {
            name: format!("Not({})", inner_meta.name).into(),
            description: Some(format!("must not satisfy {}", inner_meta.name).into()),
            complexity: inner_meta.complexity,
            cacheable: inner_meta.cacheable,
            estimated_time: None,
            tags: {
                let mut tags = inner_meta.tags;
                tags.push(Cow::Borrowed("combinator"));
                tags
            },
            version: None,
            custom: Vec::new(),
        }
    }
}

pub fn not<V>(inner: V) -> Not<V>
where
    V: Validate,
{
    Not::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Contains(&'static str);

    impl Validate for Contains {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.contains(self.0) {
                Ok(())
            } else {
                Err(ValidationError::new("contains", "missing substring"))
            }
        }
    }

    #[test]
    fn not_inverts_pass_and_fail() {
        let v = not(Contains("bad"));
        assert!(v.validate("good").is_ok());
        assert!(v.validate("bad word").is_err());
    }

    #[test]
    fn double_negation_agrees_with_original() {
        let v = Contains("x");
        let double_not = not(not(Contains("x")));
        assert_eq!(v.validate("xyz").is_ok(), double_not.validate("xyz").is_ok());
        assert_eq!(v.validate("abc").is_ok(), double_not.validate("abc").is_ok());
    }
}
