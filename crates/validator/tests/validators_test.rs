use nebula_validator::prelude::*;

#[test]
fn user_registration_style_composition() {
    let name_ok = min_length(1).and(max_length(100));
    let password_ok = min_length(8);

    assert!(name_ok.validate("Alice").is_ok());
    assert!(name_ok.validate("").is_err());
    assert!(password_ok.validate("securepass123").is_ok());
    assert!(password_ok.validate("short").is_err());
    assert!(email().validate("alice@example.com").is_ok());
    assert!(in_range(13i64, 120).validate(&28).is_ok());
    assert!(is_true().validate(&true).is_ok());
}

#[test]
fn with_message_and_code_compose_with_and() {
    let v = min_length(1)
        .with_message("name is required")
        .with_code("MISSING_NAME");

    let err = v.validate("").unwrap_err();
    assert_eq!(err.code.as_ref(), "MISSING_NAME");
    assert_eq!(err.message, "name is required");
}

#[test]
fn cached_reuses_result_for_same_input() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use nebula_validator::core::{Validate, ValidationError, ValidatorMetadata};

    struct Counting {
        calls: Arc<AtomicUsize>,
    }

    impl Validate for Counting {
        type Input = str;
        fn validate(&self, input: &str) -> Result<(), ValidationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if input.len() >= 3 {
                Ok(())
            } else {
                Err(ValidationError::new("too_short", "too short"))
            }
        }
        fn metadata(&self) -> ValidatorMetadata {
            ValidatorMetadata::named("Counting")
        }
    }

    let calls = Arc::new(AtomicUsize::new(0));
    let v = cached(Counting { calls: calls.clone() });

    v.validate("hello").unwrap();
    v.validate("hello").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
