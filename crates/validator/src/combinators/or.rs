//! OR combinator - logical disjunction of validators

use crate::core::{Validate, ValidationComplexity, ValidationError, ValidatorMetadata};
use std::borrow::Cow;

/// Combines two validators with logical OR: passes if either passes.
///
/// On failure of both, reports the right-hand validator's error nested
/// under the left-hand validator's, so callers can see why every branch
/// was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    left: L,
    right: R,
}

impl<L, R> Or<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.left.validate(input) {
            Ok(()) => Ok(()),
            Err(left_err) => match self.right.validate(input) {
                Ok(()) => Ok(()),
                Err(right_err) => Err(ValidationError::new(
                    "or_all_failed",
                    "neither alternative validator passed",
                )
                .with_nested(vec![left_err, right_err])),
            },
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        let left_meta = self.left.metadata();
        let right_meta = self.right.metadata();
        let complexity = std::cmp::max(left_meta.complexity, right_meta.complexity);

        ValidatorMetadata {
            name: format!("Or({}, {})", left_meta.name, right_meta.name).into(),
            description: Some(
                format!("Either {} or {} must pass", left_meta.name, right_meta.name).into(),
            ),
            complexity,
            cacheable: left_meta.cacheable && right_meta.cacheable,
            estimated_time: None,
            tags: {
                let mut tags = left_meta.tags;
                tags.extend(right_meta.tags);
                tags.push(Cow::Borrowed("combinator"));
                tags
            },
            version: None,
            custom: Vec::new(),
        }
    }
}

pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}

/// Passes if any validator in the list passes; on total failure, reports
/// every branch's error as a leaf message `"Invalid data"` (cheap and
/// generic — see `OneOf`'s list form in nebula-schema for the precise
/// per-variant analogue).
#[must_use]
pub fn or_all<V>(validators: Vec<V>) -> OrAll<V>
where
    V: Validate,
{
    OrAll { validators }
}

#[derive(Debug, Clone)]
pub struct OrAll<V> {
    validators: Vec<V>,
}

impl<V> Validate for OrAll<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.validators.is_empty() {
            return Ok(());
        }
        for validator in &self.validators {
            if validator.validate(input).is_ok() {
                return Ok(());
            }
        }
        Err(ValidationError::new("invalid_data", "Invalid data"))
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata {
            name: format!("OrAll(count={})", self.validators.len()).into(),
            description: Some(format!("Any of {} validators must pass", self.validators.len()).into()),
            ..ValidatorMetadata::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValidateExt;

    struct ExactLen(usize);

    impl Validate for ExactLen {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            if input.len() == self.0 {
                Ok(())
            } else {
                Err(ValidationError::new("exact_length", "wrong length"))
            }
        }
    }

    #[test]
    fn or_passes_when_either_passes() {
        let v = ExactLen(5).or(ExactLen(10));
        assert!(v.validate("hello").is_ok());
        assert!(v.validate("helloworld").is_ok());
    }

    #[test]
    fn or_fails_when_both_fail() {
        let v = ExactLen(5).or(ExactLen(10));
        let err = v.validate("hi").unwrap_err();
        assert_eq!(err.code.as_ref(), "or_all_failed");
        assert_eq!(err.nested.len(), 2);
    }

    #[test]
    fn or_all_first_match_wins() {
        let v = or_all(vec![ExactLen(3), ExactLen(5)]);
        assert!(v.validate("abc").is_ok());
        assert!(v.validate("abcde").is_ok());
        assert!(v.validate("ab").is_err());
    }
}
