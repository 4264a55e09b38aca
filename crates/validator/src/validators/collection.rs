//! Collection size validators, generic over any slice element type.

use crate::core::{Validate, ValidationError, ValidatorMetadata};
use std::marker::PhantomData;

#[derive(Debug, Clone, Copy)]
pub struct MinSize<T> {
    min: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Send + Sync> Validate for MinSize<T> {
    type Input = [T];

    fn validate(&self, input: &[T]) -> Result<(), ValidationError> {
        if input.len() >= self.min {
            Ok(())
        } else {
            Err(ValidationError::new(
                "min_size",
                format!("must have at least {} items, got {}", self.min, input.len()),
            ))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named(format!("MinSize({})", self.min))
    }
}

pub fn min_size<T>(min: usize) -> MinSize<T> {
    MinSize {
        min,
        _marker: PhantomData,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MaxSize<T> {
    max: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Send + Sync> Validate for MaxSize<T> {
    type Input = [T];

    fn validate(&self, input: &[T]) -> Result<(), ValidationError> {
        if input.len() <= self.max {
            Ok(())
        } else {
            Err(ValidationError::new(
                "max_size",
                format!("must have at most {} items, got {}", self.max, input.len()),
            ))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named(format!("MaxSize({})", self.max))
    }
}

pub fn max_size<T>(max: usize) -> MaxSize<T> {
    MaxSize {
        max,
        _marker: PhantomData,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExactSize<T> {
    size: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Send + Sync> Validate for ExactSize<T> {
    type Input = [T];

    fn validate(&self, input: &[T]) -> Result<(), ValidationError> {
        if input.len() == self.size {
            Ok(())
        } else {
            Err(ValidationError::new(
                "exact_size",
                format!("must have exactly {} items, got {}", self.size, input.len()),
            ))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named(format!("ExactSize({})", self.size))
    }
}

pub fn exact_size<T>(size: usize) -> ExactSize<T> {
    ExactSize {
        size,
        _marker: PhantomData,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SizeRange<T> {
    min: usize,
    max: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Send + Sync> Validate for SizeRange<T> {
    type Input = [T];

    fn validate(&self, input: &[T]) -> Result<(), ValidationError> {
        if input.len() >= self.min && input.len() <= self.max {
            Ok(())
        } else {
            Err(ValidationError::new(
                "size_range",
                format!(
                    "must have between {} and {} items, got {}",
                    self.min,
                    self.max,
                    input.len()
                ),
            ))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named(format!("SizeRange({}, {})", self.min, self.max))
    }
}

pub fn size_range<T>(min: usize, max: usize) -> SizeRange<T> {
    SizeRange {
        min,
        max,
        _marker: PhantomData,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NotEmptyCollection<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T: Send + Sync> Validate for NotEmptyCollection<T> {
    type Input = [T];

    fn validate(&self, input: &[T]) -> Result<(), ValidationError> {
        if input.is_empty() {
            Err(ValidationError::new("not_empty", "must not be empty"))
        } else {
            Ok(())
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("NotEmptyCollection")
    }
}

pub fn not_empty_collection<T>() -> NotEmptyCollection<T> {
    NotEmptyCollection {
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_validators() {
        let v: Vec<i32> = vec![1, 2, 3];
        assert!(min_size::<i32>(2).validate(&v).is_ok());
        assert!(min_size::<i32>(4).validate(&v).is_err());
        assert!(max_size::<i32>(3).validate(&v).is_ok());
        assert!(max_size::<i32>(2).validate(&v).is_err());
        assert!(exact_size::<i32>(3).validate(&v).is_ok());
        assert!(size_range::<i32>(1, 5).validate(&v).is_ok());
        assert!(size_range::<i32>(4, 5).validate(&v).is_err());
    }

    #[test]
    fn not_empty() {
        let empty: Vec<i32> = vec![];
        assert!(not_empty_collection::<i32>().validate(&[1]).is_ok());
        assert!(not_empty_collection::<i32>().validate(&empty).is_err());
    }
}
