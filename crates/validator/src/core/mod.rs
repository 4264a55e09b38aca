//! Core traits and supporting types for the validation framework.

mod complexity;
mod context;
mod error;
mod metadata;
mod traits;

pub use complexity::ValidationComplexity;
pub use context::{ContextualValidator, ValidationContext, ValidationContextBuilder};
pub use error::{Params, ValidationError};
pub use metadata::ValidatorMetadata;
pub use traits::{Validate, ValidateExt};
