//! `nebula-schema`: the type combinator kernel (spec.md). A bidirectional
//! `load`/`dump`/`validate` codec algebra — primitive and container
//! types, modifier types, the `Field` abstraction, `Object<O>` record
//! codec with inheritance composition, `OneOf` polymorphic dispatch, and
//! `TypeRegistry` for cyclic schemas — built on [`nebula_validator`]'s
//! `Validate` trait for the validator list every type and object carries.

pub mod adapt;
pub mod context;
pub mod error;
pub mod field;
pub mod object;
pub mod one_of;
pub mod prelude;
pub mod registry;
pub mod schema_type;
pub mod types;
pub mod value;

pub use adapt::{on_float, on_int, on_seq, on_string};
pub use context::{Context, ContextBuilder};
pub use error::{ErrorBuilder, SchemaError};
pub use field::{AttributeField, ConstantField, Field, FunctionField, IndexField, MethodField};
pub use object::{Object, ObjectBuilder};
pub use one_of::OneOf;
pub use registry::TypeRegistry;
pub use schema_type::SchemaType;
pub use value::Value;
