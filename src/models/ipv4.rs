//! IPv4 octet, integer and mask conversions.
//!
//! Addresses travel through the crate either as [`Octets`] (network order) or
//! as a plain `u32` where octet 0 sits in bits 31-24. Masks are `u32` values
//! with a contiguous run of leading ones.

use super::Ipv4Error;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of octets in an IPv4 address.
pub const IP4_OCTETS_COUNT: usize = 4;

/// Longest decimal text for a single octet ("255").
pub const IP4_OCTET_MAX_LEN: usize = 3;

/// Octet separator in dotted-decimal text.
pub const IP4_SEPARATOR: char = '.';

/// Buffer size that fits "255.255.255.255" plus a NUL terminator.
pub const IP4_STRING_SIZE: usize = 16;

/// The four octets of an IPv4 address, most significant first.
pub type Octets = [u8; IP4_OCTETS_COUNT];

/// Reject prefix lengths outside 0-32.
pub fn check_prefix(len: u8) -> Result<u8, Ipv4Error> {
    if len > MAX_LENGTH {
        log::debug!("rejecting prefix /{len}");
        Err(Ipv4Error::InvalidPrefix(len))
    } else {
        Ok(len)
    }
}

/// Pack octets into a `u32`, octet 0 in the high byte.
///
/// # Examples
/// ```
/// use ipv4_subnet_toolkit::octets_to_bits;
/// assert_eq!(octets_to_bits([192, 168, 0, 1]), 0xC0A80001);
/// ```
pub fn octets_to_bits(octets: Octets) -> u32 {
    octets
        .iter()
        .fold(0u32, |bits, &octet| (bits << 8) | u32::from(octet))
}

/// Split a `u32` back into octets. Exact inverse of [`octets_to_bits`].
pub fn bits_to_octets(bits: u32) -> Octets {
    [
        ((bits >> 24) & 0xFF) as u8,
        ((bits >> 16) & 0xFF) as u8,
        ((bits >> 8) & 0xFF) as u8,
        (bits & 0xFF) as u8,
    ]
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use ipv4_subnet_toolkit::mask_for_prefix;
/// assert_eq!(mask_for_prefix(24).unwrap(), 0xFFFFFF00);
/// assert!(mask_for_prefix(33).is_err());
/// ```
pub fn mask_for_prefix(len: u8) -> Result<u32, Ipv4Error> {
    let len = check_prefix(len)?;
    let right_len = MAX_LENGTH - len;
    // Shift in u64 so /0 does not shift a u32 by 32.
    let all_bits = u32::MAX as u64;
    let mask = (all_bits >> right_len) << right_len;

    Ok(mask as u32)
}

/// Recover the prefix length from a contiguous mask.
pub fn prefix_for_mask(mask: u32) -> Result<u8, Ipv4Error> {
    let len = mask.leading_ones() as u8;
    if mask_for_prefix(len)? == mask {
        Ok(len)
    } else {
        log::debug!("mask {mask:#010x} has holes");
        Err(Ipv4Error::NonContiguousMask(mask))
    }
}

/// Shortest prefix for which `addr` is its own network id.
pub fn min_prefix(addr: u32) -> u8 {
    MAX_LENGTH - addr.trailing_zeros() as u8
}
