//! Temporal/format validators (feature = "temporal").
//!
//! These back `nebula-schema`'s `Date`/`Time`/`DateTime` primitive types
//! (spec §4.4): an ISO-8601 string is structurally decoded by the schema
//! type, and these validators additionally let a user derive a stricter
//! variant with `validated_type` (spec §4.10).

use crate::core::{Validate, ValidationError, ValidatorMetadata};
use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, Copy, Default)]
pub struct Date;

impl Validate for Date {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        input
            .parse::<NaiveDate>()
            .map(|_| ())
            .map_err(|_| ValidationError::new("invalid_date", "not an ISO-8601 date"))
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("Date")
    }
}

pub fn date() -> Date {
    Date
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Time;

impl Validate for Time {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        input
            .parse::<NaiveTime>()
            .map(|_| ())
            .map_err(|_| ValidationError::new("invalid_time", "not an ISO-8601 time"))
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("Time")
    }
}

pub fn time() -> Time {
    Time
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DateTime;

impl Validate for DateTime {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        chrono::DateTime::parse_from_rfc3339(input)
            .map(|_| ())
            .map_err(|_| ValidationError::new("invalid_datetime", "not an ISO-8601 datetime"))
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("DateTime")
    }
}

pub fn date_time() -> DateTime {
    DateTime
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Uuid;

impl Validate for Uuid {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        input
            .parse::<uuid::Uuid>()
            .map(|_| ())
            .map_err(|_| ValidationError::new("invalid_uuid", "not a valid UUID"))
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("Uuid")
    }
}

pub fn uuid() -> Uuid {
    Uuid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_time_formats() {
        assert!(date().validate("2024-01-15").is_ok());
        assert!(date().validate("not-a-date").is_err());
        assert!(time().validate("13:45:00").is_ok());
        assert!(date_time().validate("2024-01-15T13:45:00Z").is_ok());
        assert!(date_time().validate("2024-01-15 13:45:00").is_err());
    }

    #[test]
    fn uuid_format() {
        assert!(uuid().validate("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(uuid().validate("not-a-uuid").is_err());
    }
}
