//! Boolean validators.

use crate::core::{Validate, ValidationError, ValidatorMetadata};

#[derive(Debug, Clone, Copy, Default)]
pub struct IsTrue;

impl Validate for IsTrue {
    type Input = bool;

    fn validate(&self, input: &bool) -> Result<(), ValidationError> {
        if *input {
            Ok(())
        } else {
            Err(ValidationError::new("is_true", "must be true"))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("IsTrue")
    }
}

pub fn is_true() -> IsTrue {
    IsTrue
}

#[derive(Debug, Clone, Copy, Default)]
pub struct IsFalse;

impl Validate for IsFalse {
    type Input = bool;

    fn validate(&self, input: &bool) -> Result<(), ValidationError> {
        if !*input {
            Ok(())
        } else {
            Err(ValidationError::new("is_false", "must be false"))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("IsFalse")
    }
}

pub fn is_false() -> IsFalse {
    IsFalse
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_true_and_false() {
        assert!(is_true().validate(&true).is_ok());
        assert!(is_true().validate(&false).is_err());
        assert!(is_false().validate(&false).is_ok());
        assert!(is_false().validate(&true).is_err());
    }
}
