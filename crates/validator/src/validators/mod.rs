//! Ready-made leaf validators.

mod boolean;
mod collection;
mod numeric;
mod string;

#[cfg(feature = "network")]
mod network;

#[cfg(feature = "temporal")]
mod temporal;

pub use boolean::{is_false, is_true, IsFalse, IsTrue};
pub use collection::{
    exact_size, max_size, min_size, not_empty_collection, size_range, ExactSize, MaxSize, MinSize,
    NotEmptyCollection, SizeRange,
};
pub use numeric::{in_range, max, min, positive, InRange, Max, Min, Positive};
pub use string::{
    any_of, contains, email, exact_length, matches_regex, max_length, min_length, url, AnyOf,
    Contains, Email, ExactLength, MatchesRegex, MaxLength, MinLength, Url,
};

#[cfg(feature = "network")]
pub use network::{hostname, ipv4, ipv6, Hostname, Ipv4, Ipv6};

#[cfg(feature = "temporal")]
pub use temporal::{date, date_time, time, uuid, Date, DateTime, Time, Uuid};
