//! Validator combinators: compose existing validators into new ones
//! without changing their `Input` type.

mod and;
mod cached;
mod message;
mod not;
mod or;
mod when;

pub use and::{and, and_all, And, AndAll};
pub use cached::{cached, CacheStats, Cached};
pub use message::{with_code, with_message, WithCode, WithMessage};
pub use not::{not, Not};
pub use or::{or, or_all, Or, OrAll};
pub use when::{unless, when, Negated, Predicate, When};
