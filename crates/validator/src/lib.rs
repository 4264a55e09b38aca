//! Low-level, single-value validation framework.
//!
//! [`core::Validate`] is the fundamental trait: a predicate over one input
//! type that either succeeds or fails with a [`core::ValidationError`].
//! [`combinators`] compose validators (`and`, `or`, `not`, `when`, ...)
//! without changing their `Input` type. [`validators`] are the ready-made
//! leaves (string length, numeric range, regex, ...).
//!
//! This crate has no notion of a record, a field, or a bidirectional
//! codec — that's `nebula-schema`, which uses `Validate<Input = schema
//! ::Value>` as the building block for a type's validator list.

#![allow(clippy::type_complexity)]
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod core;
pub mod validators;

pub mod prelude;
