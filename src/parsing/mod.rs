//! Turning text into addresses.
//!
//! - `classify` - syntactic IPv4 / IPv6 pre-filters
//! - `parse` - dotted-decimal parsing and integer conversion

pub mod classify;
pub mod parse;

pub use classify::{classify, could_be_ipv4, could_be_ipv6, AddressKind};
pub use parse::{parse_ipv4, to_integer};
