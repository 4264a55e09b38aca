//! Numeric validators, generic over any `PartialOrd + Copy + Display`
//! scalar (`i64`, `f64`, `u32`, ...).

use crate::core::{Validate, ValidationError, ValidatorMetadata};
use std::fmt::Display;
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy)]
pub struct Min<T> {
    min: T,
}

impl<T> Validate for Min<T>
where
    T: PartialOrd + Copy + Display + Send + Sync,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if *input >= self.min {
            Ok(())
        } else {
            Err(ValidationError::new(
                "min",
                format!("must be at least {}, got {input}", self.min),
            ))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named(format!("Min({})", self.min))
    }
}

pub fn min<T>(min: T) -> Min<T> {
    Min { min }
}

#[derive(Debug, Clone, Copy)]
pub struct Max<T> {
    max: T,
}

impl<T> Validate for Max<T>
where
    T: PartialOrd + Copy + Display + Send + Sync,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if *input <= self.max {
            Ok(())
        } else {
            Err(ValidationError::new(
                "max",
                format!("must be at most {}, got {input}", self.max),
            ))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named(format!("Max({})", self.max))
    }
}

pub fn max<T>(max: T) -> Max<T> {
    Max { max }
}

#[derive(Debug, Clone, Copy)]
pub struct InRange<T> {
    min: T,
    max: T,
}

impl<T> Validate for InRange<T>
where
    T: PartialOrd + Copy + Display + Send + Sync,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if *input >= self.min && *input <= self.max {
            Ok(())
        } else {
            Err(ValidationError::new(
                "out_of_range",
                format!("must be between {} and {}, got {input}", self.min, self.max),
            ))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named(format!("InRange({}, {})", self.min, self.max))
    }
}

pub fn in_range<T>(min: T, max: T) -> InRange<T> {
    InRange { min, max }
}

#[derive(Debug, Clone, Copy)]
pub struct Positive<T> {
    _marker: PhantomData<T>,
}

impl<T> Validate for Positive<T>
where
    T: PartialOrd + Copy + Display + Default + Send + Sync,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if *input > T::default() {
            Ok(())
        } else {
            Err(ValidationError::new("positive", format!("must be positive, got {input}")))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("Positive")
    }
}

pub fn positive<T>() -> Positive<T> {
    Positive {
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_in_range() {
        assert!(min(18i64).validate(&25).is_ok());
        assert!(min(18i64).validate(&10).is_err());
        assert!(max(100i64).validate(&50).is_ok());
        assert!(max(100i64).validate(&101).is_err());
        assert!(in_range(1i64, 65535).validate(&8080).is_ok());
        assert!(in_range(1i64, 65535).validate(&0).is_err());
    }

    #[test]
    fn positive_numbers() {
        assert!(positive::<i64>().validate(&1).is_ok());
        assert!(positive::<i64>().validate(&-1).is_err());
        assert!(positive::<f64>().validate(&3.14).is_ok());
        assert!(positive::<f64>().validate(&-0.5).is_err());
    }
}
