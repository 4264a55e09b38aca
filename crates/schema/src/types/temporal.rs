//! `Date`/`Time`/`DateTime` — ISO-8601 string codecs (spec §4.4).
//!
//! Grounded in `nebula-validator`'s own temporal validators
//! (`nebula_validator::validators::temporal`), which check the same
//! ISO-8601 shapes for standalone string validation; here the parsed
//! `chrono` value becomes the *loaded* representation rather than just a
//! pass/fail check, since these are full codecs, not validators.

use chrono::{NaiveDate, NaiveTime, Utc, DateTime as ChronoDateTime};
use nebula_validator::core::Validate;
use serde_json::Value as JsonValue;

use crate::context::Context;
use crate::error::SchemaError;
use crate::schema_type::{SchemaType, TypeMeta, ValueValidator};
use crate::value::{json_kind, Value};

macro_rules! delegate_meta {
    () => {
        fn name(&self) -> Option<&str> {
            self.meta.name.as_deref()
        }

        fn description(&self) -> Option<&str> {
            self.meta.description.as_deref()
        }

        fn validators(&self) -> &[std::sync::Arc<ValueValidator>] {
            &self.meta.validators
        }
    };
}

#[derive(Default)]
pub struct Date {
    meta: TypeMeta,
}

impl Date {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.meta = self.meta.named(name);
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: impl Validate<Input = Value> + 'static) -> Self {
        self.meta = self.meta.with_validator(validator);
        self
    }
}

impl SchemaType for Date {
    delegate_meta!();

    fn _load(&self, data: &JsonValue, _ctx: &Context) -> Result<Value, SchemaError> {
        match data {
            JsonValue::Null => Err(SchemaError::required()),
            JsonValue::String(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(Value::Date)
                .map_err(|_| SchemaError::leaf("not a valid ISO-8601 date")),
            other => Err(SchemaError::type_mismatch("date string", json_kind(other))),
        }
    }

    fn _dump(&self, value: &Value, _ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        match value {
            Value::Missing => Err(SchemaError::required()),
            Value::Date(d) => Ok(Some(JsonValue::String(d.format("%Y-%m-%d").to_string()))),
            other => Err(SchemaError::type_mismatch("date", other.kind())),
        }
    }
}

#[derive(Default)]
pub struct Time {
    meta: TypeMeta,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.meta = self.meta.named(name);
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: impl Validate<Input = Value> + 'static) -> Self {
        self.meta = self.meta.with_validator(validator);
        self
    }
}

impl SchemaType for Time {
    delegate_meta!();

    fn _load(&self, data: &JsonValue, _ctx: &Context) -> Result<Value, SchemaError> {
        match data {
            JsonValue::Null => Err(SchemaError::required()),
            JsonValue::String(s) => NaiveTime::parse_from_str(s, "%H:%M:%S")
                .map(Value::Time)
                .map_err(|_| SchemaError::leaf("not a valid ISO-8601 time")),
            other => Err(SchemaError::type_mismatch("time string", json_kind(other))),
        }
    }

    fn _dump(&self, value: &Value, _ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        match value {
            Value::Missing => Err(SchemaError::required()),
            Value::Time(t) => Ok(Some(JsonValue::String(t.format("%H:%M:%S").to_string()))),
            other => Err(SchemaError::type_mismatch("time", other.kind())),
        }
    }
}

#[derive(Default)]
pub struct DateTime {
    meta: TypeMeta,
}

impl DateTime {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.meta = self.meta.named(name);
        self
    }

    #[must_use]
    pub fn with_validator(mut self, validator: impl Validate<Input = Value> + 'static) -> Self {
        self.meta = self.meta.with_validator(validator);
        self
    }
}

impl SchemaType for DateTime {
    delegate_meta!();

    fn _load(&self, data: &JsonValue, _ctx: &Context) -> Result<Value, SchemaError> {
        match data {
            JsonValue::Null => Err(SchemaError::required()),
            JsonValue::String(s) => ChronoDateTime::parse_from_rfc3339(s)
                .map(|dt| Value::DateTime(dt.with_timezone(&Utc)))
                .map_err(|_| SchemaError::leaf("not a valid ISO-8601 datetime")),
            other => Err(SchemaError::type_mismatch(
                "datetime string",
                json_kind(other),
            )),
        }
    }

    fn _dump(&self, value: &Value, _ctx: &Context) -> Result<Option<JsonValue>, SchemaError> {
        match value {
            Value::Missing => Err(SchemaError::required()),
            Value::DateTime(dt) => Ok(Some(JsonValue::String(dt.to_rfc3339()))),
            other => Err(SchemaError::type_mismatch("datetime", other.kind())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> Context {
        Context::new()
    }

    #[test]
    fn date_round_trip() {
        let t = Date::new();
        let loaded = t.load(&JsonValue::String("1997-06-27".into()), &ctx()).unwrap();
        assert_eq!(
            t.dump(&loaded, &ctx()).unwrap(),
            Some(JsonValue::String("1997-06-27".into()))
        );
    }

    #[test]
    fn date_rejects_unparseable_string() {
        let t = Date::new();
        assert!(t.load(&JsonValue::String("not-a-date".into()), &ctx()).is_err());
        assert!(t.load(&JsonValue::from(3), &ctx()).is_err());
    }

    #[test]
    fn datetime_round_trip() {
        let t = DateTime::new();
        let loaded = t
            .load(
                &JsonValue::String("2024-01-01T12:00:00Z".into()),
                &ctx(),
            )
            .unwrap();
        assert!(matches!(loaded, Value::DateTime(_)));
        assert!(t.dump(&loaded, &ctx()).unwrap().is_some());
    }
}
