//! Primitive, container, and modifier types (spec §4.4, §4.5) and the
//! `validated_type` helper (spec §4.10).

pub mod container;
pub mod modifier;
pub mod primitive;
pub mod temporal;
pub mod validated;

pub use container::{Dict, FixedDict, List, Tuple};
pub use modifier::{Constant, DumpOnly, LoadOnly, Optional, Transform};
pub use primitive::{Any, Boolean, Float, Integer, StringType};
pub use temporal::{Date, DateTime, Time};
pub use validated::validated_type;
