//! `use nebula_schema::prelude::*;` for building schemas.

pub use crate::adapt::{on_float, on_int, on_seq, on_string};
pub use crate::context::{Context, ContextBuilder};
pub use crate::error::{ErrorBuilder, SchemaError};
pub use crate::field::{AttributeField, ConstantField, Field, FunctionField, IndexField, MethodField};
pub use crate::object::{Object, ObjectBuilder};
pub use crate::one_of::{dict_value_hint, OneOf};
pub use crate::registry::{RegistryRef, TypeRegistry};
pub use crate::schema_type::SchemaType;
pub use crate::types::{
    validated_type, Any, Boolean, Constant, Date, DateTime, Dict, DumpOnly, FixedDict, Float,
    Integer, List, LoadOnly, Optional, StringType, Time, Transform, Tuple,
};
pub use crate::value::Value;
