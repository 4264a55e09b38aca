//! The opaque context object threaded through every `load`/`dump`/
//! `validate` (spec §6). `nebula-validator` already owns exactly this
//! shape — a type-keyed map plus a field-path stack — as
//! [`nebula_validator::core::ValidationContext`]; this crate reuses it
//! directly rather than defining a second context type.

pub use nebula_validator::core::{ValidationContext as Context, ValidationContextBuilder as ContextBuilder};
