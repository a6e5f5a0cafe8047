//! IPv4 address parsing, formatting and subnet arithmetic.
//!
//! Text flows one way through the crate:
//! string → [`Octets`] → `u32` → masked `u32` → string.
//!
//! ```
//! use ipv4_subnet_toolkit::{broadcast_address, is_member, network_id};
//!
//! assert_eq!(network_id("192.168.0.1", 24).unwrap(), "192.168.0.0");
//! assert_eq!(broadcast_address("192.168.0.1", 24).unwrap(), "192.168.0.255");
//! assert!(is_member("192.168.2.0", 24, "192.168.2.10").unwrap());
//! ```
//!
//! Every fallible function returns [`Ipv4Error`]. Prefix lengths above 32 are
//! always rejected; octets above 255 saturate while parsing.

pub mod config;
pub mod models;
pub mod output;
pub mod parsing;
pub mod processing;

pub use models::{
    bits_to_octets, mask_for_prefix, min_prefix, octets_to_bits, prefix_for_mask, Ipv4Error,
    Octets, Subnet, IP4_STRING_SIZE, MAX_LENGTH,
};
pub use output::{format_ipv4, format_ipv4_into, format_octets, SubnetReport};
pub use parsing::{classify, could_be_ipv4, could_be_ipv6, parse_ipv4, to_integer, AddressKind};
pub use processing::{
    broadcast_address, host_range, is_member, network_id, next_subnet, subnet_cardinality,
};
