//! String validators.

use crate::core::{Validate, ValidationError, ValidatorMetadata};
use regex::Regex;

#[derive(Debug, Clone, Copy)]
pub struct MinLength {
    min: usize,
}

impl Validate for MinLength {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let len = input.chars().count();
        if len >= self.min {
            Ok(())
        } else {
            Err(ValidationError::min_length("", self.min, len))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named(format!("MinLength({})", self.min))
    }
}

pub fn min_length(min: usize) -> MinLength {
    MinLength { min }
}

#[derive(Debug, Clone, Copy)]
pub struct MaxLength {
    max: usize,
}

impl Validate for MaxLength {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let len = input.chars().count();
        if len <= self.max {
            Ok(())
        } else {
            Err(ValidationError::max_length("", self.max, len))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named(format!("MaxLength({})", self.max))
    }
}

pub fn max_length(max: usize) -> MaxLength {
    MaxLength { max }
}

#[derive(Debug, Clone, Copy)]
pub struct ExactLength {
    len: usize,
}

impl Validate for ExactLength {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let len = input.chars().count();
        if len == self.len {
            Ok(())
        } else {
            Err(ValidationError::new(
                "exact_length",
                format!("must be exactly {} characters long, got {len}", self.len),
            ))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named(format!("ExactLength({})", self.len))
    }
}

pub fn exact_length(len: usize) -> ExactLength {
    ExactLength { len }
}

#[derive(Debug, Clone)]
pub struct Contains {
    needle: String,
}

impl Validate for Contains {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if input.contains(&self.needle) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "contains",
                format!("must contain {:?}", self.needle),
            ))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named(format!("Contains({:?})", self.needle))
    }
}

pub fn contains(needle: impl Into<String>) -> Contains {
    Contains {
        needle: needle.into(),
    }
}

#[derive(Debug, Clone)]
pub struct MatchesRegex {
    pattern: Regex,
}

impl Validate for MatchesRegex {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "pattern_mismatch",
                format!("does not match pattern {}", self.pattern.as_str()),
            ))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named(format!("MatchesRegex({})", self.pattern.as_str()))
    }
}

/// Fails at construction time with `regex::Error` if `pattern` does not
/// compile — this is a one-shot build step, not a per-call cost.
pub fn matches_regex(pattern: &str) -> Result<MatchesRegex, regex::Error> {
    Ok(MatchesRegex {
        pattern: Regex::new(pattern)?,
    })
}

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
const URL_PATTERN: &str = r"^[a-zA-Z][a-zA-Z0-9+.-]*://[^\s]+$";

#[derive(Debug, Clone)]
pub struct Email {
    pattern: Regex,
}

impl Default for Email {
    fn default() -> Self {
        Self {
            // Pattern is a fixed, known-valid literal; unwrap cannot fail.
            pattern: Regex::new(EMAIL_PATTERN).unwrap(),
        }
    }
}

impl Validate for Email {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new("invalid_email", "not a valid email address"))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("Email")
    }
}

pub fn email() -> Email {
    Email::default()
}

#[derive(Debug, Clone)]
pub struct Url {
    pattern: Regex,
}

impl Default for Url {
    fn default() -> Self {
        Self {
            pattern: Regex::new(URL_PATTERN).unwrap(),
        }
    }
}

impl Validate for Url {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.pattern.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new("invalid_url", "not a valid URL"))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("Url")
    }
}

pub fn url() -> Url {
    Url::default()
}

/// Membership in a fixed set of allowed strings (`AnyOf` in the
/// surrounding ecosystem's terms — e.g. an enum-backed `role` field).
#[derive(Debug, Clone)]
pub struct AnyOf {
    allowed: Vec<String>,
}

impl Validate for AnyOf {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        if self.allowed.iter().any(|a| a == input) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "not_one_of",
                format!("must be one of: {}", self.allowed.join(", ")),
            ))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named(format!("AnyOf({})", self.allowed.join(",")))
    }
}

pub fn any_of(allowed: impl IntoIterator<Item = impl Into<String>>) -> AnyOf {
    AnyOf {
        allowed: allowed.into_iter().map(Into::into).collect(),
    }
}
