//! Value types for IPv4 addresses.
//!
//! - `ipv4` - octets, integer form, masks and prefix lengths
//! - [`Subnet`] - an address with its prefix length
//! - [`Ipv4Error`] - everything that can be rejected

mod error;
mod ipv4;
mod subnet;

// Re-export public types
pub use error::Ipv4Error;
pub use ipv4::{
    bits_to_octets, check_prefix, mask_for_prefix, min_prefix, octets_to_bits, prefix_for_mask,
    Octets, IP4_OCTETS_COUNT, IP4_OCTET_MAX_LEN, IP4_SEPARATOR, IP4_STRING_SIZE, MAX_LENGTH,
};
pub use subnet::Subnet;
