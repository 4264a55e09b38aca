//! Descriptive, introspectable metadata every validator can report about
//! itself. Combinators merge their children's metadata rather than
//! hand-writing their own.

use super::complexity::ValidationComplexity;
use std::borrow::Cow;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorMetadata {
    pub name: Cow<'static, str>,
    pub description: Option<Cow<'static, str>>,
    pub complexity: ValidationComplexity,
    pub cacheable: bool,
    pub estimated_time: Option<Duration>,
    pub tags: Vec<Cow<'static, str>>,
    pub version: Option<Cow<'static, str>>,
    pub custom: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl Default for ValidatorMetadata {
    fn default() -> Self {
        Self {
            name: Cow::Borrowed("validator"),
            description: None,
            complexity: ValidationComplexity::Constant,
            cacheable: true,
            estimated_time: None,
            tags: Vec::new(),
            version: None,
            custom: Vec::new(),
        }
    }
}

impl ValidatorMetadata {
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}
