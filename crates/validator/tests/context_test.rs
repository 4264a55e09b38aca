use nebula_validator::core::{
    ContextualValidator, ValidationContext, ValidationContextBuilder, ValidationError,
};

#[test]
fn context_insert_and_get() {
    let mut ctx = ValidationContext::new();
    ctx.insert("key", 42usize);

    assert_eq!(ctx.get::<usize>("key"), Some(&42));
    assert_eq!(ctx.get::<String>("key"), None);
    assert_eq!(ctx.get::<usize>("missing"), None);
    assert!(ctx.contains("key"));
    assert!(!ctx.is_empty());
    assert_eq!(ctx.len(), 1);
}

#[test]
fn context_field_path_push_pop() {
    let mut ctx = ValidationContext::new();
    ctx.push_field("user");
    ctx.push_field("address");
    ctx.push_field("zipcode");
    assert_eq!(ctx.field_path(), "user.address.zipcode");

    assert_eq!(ctx.pop_field(), Some("zipcode".to_string()));
    assert_eq!(ctx.field_path(), "user.address");

    ctx.clear_path();
    assert_eq!(ctx.field_path(), "");
}

#[test]
fn context_child_inherits_parent_data_and_path() {
    let mut parent = ValidationContext::new();
    parent.push_field("parent");
    parent.insert("key", 42usize);

    let (_snapshot, child) = parent.child();

    assert_eq!(child.field_path(), "parent");
    assert_eq!(child.get::<usize>("key"), Some(&42));
}

#[test]
fn context_builder() {
    let ctx = ValidationContextBuilder::new()
        .with("max", 100usize)
        .with("min", 5usize)
        .build();

    assert_eq!(ctx.get::<usize>("max"), Some(&100));
    assert_eq!(ctx.get::<usize>("min"), Some(&5));
}

struct Form {
    email: String,
}

struct RequireEmailWhenFlagged;

impl ContextualValidator for RequireEmailWhenFlagged {
    type Input = Form;

    fn validate_with_context(
        &self,
        input: &Form,
        ctx: &ValidationContext,
    ) -> Result<(), ValidationError> {
        let require = ctx.get::<bool>("require_email").copied().unwrap_or(false);
        if require && input.email.is_empty() {
            Err(ValidationError::new("email_required", "email is required"))
        } else {
            Ok(())
        }
    }
}

#[test]
fn contextual_validator_reads_flag_from_context() {
    let validator = RequireEmailWhenFlagged;
    let required_ctx = ValidationContextBuilder::new().with("require_email", true).build();
    let optional_ctx = ValidationContextBuilder::new().with("require_email", false).build();

    let empty = Form { email: String::new() };
    let filled = Form { email: "a@b.com".into() };

    assert!(validator.validate_with_context(&empty, &required_ctx).is_err());
    assert!(validator.validate_with_context(&empty, &optional_ctx).is_ok());
    assert!(validator.validate_with_context(&filled, &required_ctx).is_ok());
}
