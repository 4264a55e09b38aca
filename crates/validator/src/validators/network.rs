//! Network address/name validators (feature = "network").

use crate::core::{Validate, ValidationError, ValidatorMetadata};
use std::net::{Ipv4Addr, Ipv6Addr};

#[derive(Debug, Clone, Copy, Default)]
pub struct Ipv4;

impl Validate for Ipv4 {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        input
            .parse::<Ipv4Addr>()
            .map(|_| ())
            .map_err(|_| ValidationError::new("invalid_ipv4", "not a valid IPv4 address"))
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("Ipv4")
    }
}

pub fn ipv4() -> Ipv4 {
    Ipv4
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Ipv6;

impl Validate for Ipv6 {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        input
            .parse::<Ipv6Addr>()
            .map(|_| ())
            .map_err(|_| ValidationError::new("invalid_ipv6", "not a valid IPv6 address"))
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("Ipv6")
    }
}

pub fn ipv6() -> Ipv6 {
    Ipv6
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Hostname;

impl Validate for Hostname {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let valid = !input.is_empty()
            && input.len() <= 253
            && input
                .split('.')
                .all(|label| {
                    !label.is_empty()
                        && label.len() <= 63
                        && !label.starts_with('-')
                        && !label.ends_with('-')
                        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
                });
        if valid {
            Ok(())
        } else {
            Err(ValidationError::new("invalid_hostname", "not a valid hostname"))
        }
    }

    fn metadata(&self) -> ValidatorMetadata {
        ValidatorMetadata::named("Hostname")
    }
}

pub fn hostname() -> Hostname {
    Hostname
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ip_validators() {
        assert!(ipv4().validate("192.168.0.1").is_ok());
        assert!(ipv4().validate("not-an-ip").is_err());
        assert!(ipv6().validate("::1").is_ok());
        assert!(ipv6().validate("192.168.0.1").is_err());
    }

    #[test]
    fn hostname_validator() {
        assert!(hostname().validate("example.com").is_ok());
        assert!(hostname().validate("-bad.com").is_err());
        assert!(hostname().validate("").is_err());
    }
}
