//! `use nebula_validator::prelude::*;` for common validation scenarios.

pub use crate::combinators::{and, cached, not, or, unless, when, with_code, with_message};
pub use crate::core::{
    ContextualValidator, Validate, ValidateExt, ValidationComplexity, ValidationContext,
    ValidationContextBuilder, ValidationError, ValidatorMetadata,
};
pub use crate::validators::{
    any_of, contains, email, exact_length, in_range, is_false, is_true, matches_regex, max,
    max_length, min, min_length, not_empty_collection, positive, url,
};

#[cfg(feature = "network")]
pub use crate::validators::{hostname, ipv4, ipv6};

#[cfg(feature = "temporal")]
pub use crate::validators::{date, date_time, time, uuid};
