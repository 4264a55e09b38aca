//! Adapters bridging `nebula-validator`'s narrower-input validators
//! (`str`, numeric scalars, `[T]`) into `Validate<Input = Value>` so the
//! same `min_length`/`in_range`/`any_of`/`min_size`/... validators the
//! rest of the ecosystem uses can sit directly in a type's validator
//! list (spec §3.3, "an ordered list of validators") instead of
//! `nebula-schema` reimplementing a second copy of each one against
//! `Value`.

use nebula_validator::core::{Validate, ValidationError, ValidatorMetadata};

use crate::value::Value;

/// Adapts a `str`-input validator (`min_length`, `max_length`,
/// `matches_regex`, `any_of`, `email`, `url`, ...) to run against a
/// loaded [`Value`], failing with a type-mismatch leaf if the value
/// isn't [`Value::String`].
pub struct OnString<V>(V);

impl<V: Validate<Input = str>> Validate for OnString<V> {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match input.as_str() {
            Some(s) => self.0.validate(s),
            None => Err(ValidationError::type_mismatch("", "string")),
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        self.0.metadata()
    }
}

pub fn on_string<V: Validate<Input = str>>(validator: V) -> OnString<V> {
    OnString(validator)
}

/// Adapts an `i64`-input validator (`min`, `max`, `in_range`
/// instantiated over `i64`) to run against a loaded [`Value::Int`].
pub struct OnInt<V>(V);

impl<V: Validate<Input = i64>> Validate for OnInt<V> {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match input.as_i64() {
            Some(i) => self.0.validate(&i),
            None => Err(ValidationError::type_mismatch("", "integer")),
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        self.0.metadata()
    }
}

pub fn on_int<V: Validate<Input = i64>>(validator: V) -> OnInt<V> {
    OnInt(validator)
}

/// Adapts an `f64`-input validator to run against a loaded
/// [`Value::Float`] (or [`Value::Int`], widened).
pub struct OnFloat<V>(V);

impl<V: Validate<Input = f64>> Validate for OnFloat<V> {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match input.as_f64() {
            Some(f) => self.0.validate(&f),
            None => Err(ValidationError::type_mismatch("", "float")),
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        self.0.metadata()
    }
}

pub fn on_float<V: Validate<Input = f64>>(validator: V) -> OnFloat<V> {
    OnFloat(validator)
}

/// Adapts a `[Value]`-input collection-size validator (`min_size`,
/// `max_size`, `size_range`, `not_empty_collection`, instantiated over
/// `Value`) to run against a loaded [`Value::Seq`] or [`Value::Tuple`].
pub struct OnSeq<V>(V);

impl<V: Validate<Input = [Value]>> Validate for OnSeq<V> {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match input.as_seq() {
            Some(items) => self.0.validate(items),
            None => Err(ValidationError::type_mismatch("", "array")),
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        self.0.metadata()
    }
}

pub fn on_seq<V: Validate<Input = [Value]>>(validator: V) -> OnSeq<V> {
    OnSeq(validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nebula_validator::validators::{any_of, in_range, min_length};

    #[test]
    fn on_string_runs_str_validator_against_loaded_string() {
        let v = on_string(min_length(3));
        assert!(v.validate(&Value::String("abcd".into())).is_ok());
        assert!(v.validate(&Value::String("ab".into())).is_err());
        assert!(v.validate(&Value::Int(1)).is_err());
    }

    #[test]
    fn on_string_runs_any_of_for_enum_style_fields() {
        let v = on_string(any_of(["admin", "customer"]));
        assert!(v.validate(&Value::String("customer".into())).is_ok());
        assert!(v.validate(&Value::String("root".into())).is_err());
    }

    #[test]
    fn on_int_runs_numeric_validator_against_loaded_int() {
        let v = on_int(in_range(0, 120));
        assert!(v.validate(&Value::Int(38)).is_ok());
        assert!(v.validate(&Value::Int(200)).is_err());
    }

    #[test]
    fn on_seq_runs_collection_validator_against_loaded_list() {
        use nebula_validator::validators::min_size;
        let v = on_seq(min_size::<Value>(2));
        assert!(v
            .validate(&Value::Seq(vec![Value::Int(1), Value::Int(2)]))
            .is_ok());
        assert!(v.validate(&Value::Seq(vec![Value::Int(1)])).is_err());
    }
}
