//! Network id, broadcast, host count and membership.
//!
//! Each operation exists twice: over the `u32` form of an address, and over
//! dotted-decimal text for callers that never leave strings.

use crate::models::{mask_for_prefix, Ipv4Error, MAX_LENGTH};
use crate::output::format_ipv4;
use crate::parsing::to_integer;

/// Clear the host bits of `addr`.
pub fn network_bits(addr: u32, prefix: u8) -> Result<u32, Ipv4Error> {
    Ok(addr & mask_for_prefix(prefix)?)
}

/// Set the host bits of `addr`.
pub fn broadcast_bits(addr: u32, prefix: u8) -> Result<u32, Ipv4Error> {
    Ok(addr | !mask_for_prefix(prefix)?)
}

/// Whether `candidate` falls in the same /`prefix` network as `network`.
pub fn contains_bits(network: u32, prefix: u8, candidate: u32) -> Result<bool, Ipv4Error> {
    let mask = mask_for_prefix(prefix)?;
    Ok(candidate & mask == network & mask)
}

/// First address after the /`prefix` network holding `addr`.
pub fn next_subnet_bits(addr: u32, prefix: u8) -> Result<u32, Ipv4Error> {
    broadcast_bits(addr, prefix)?
        .checked_add(1)
        .ok_or(Ipv4Error::Overflow)
}

/// Number of usable hosts in a /`prefix` network.
///
/// Network and broadcast addresses are not counted, so /31 and /32 have none.
///
/// # Examples
/// ```
/// use ipv4_subnet_toolkit::subnet_cardinality;
/// assert_eq!(subnet_cardinality(24).unwrap(), 254);
/// assert_eq!(subnet_cardinality(31).unwrap(), 0);
/// ```
pub fn subnet_cardinality(prefix: u8) -> Result<u64, Ipv4Error> {
    mask_for_prefix(prefix)?;
    let num_hosts = match MAX_LENGTH - prefix {
        // /31 point-to-point and /32 single host
        0 | 1 => 0,
        host_bits => (1u64 << host_bits) - 2,
    };
    Ok(num_hosts)
}

/// Network id of `ip` as text.
///
/// # Examples
/// ```
/// use ipv4_subnet_toolkit::network_id;
/// assert_eq!(network_id("10.1.23.10", 20).unwrap(), "10.1.16.0");
/// ```
pub fn network_id(ip: &str, prefix: u8) -> Result<String, Ipv4Error> {
    Ok(format_ipv4(network_bits(to_integer(ip)?, prefix)?))
}

/// Broadcast address of `ip` as text.
///
/// # Examples
/// ```
/// use ipv4_subnet_toolkit::broadcast_address;
/// assert_eq!(broadcast_address("10.1.23.10", 20).unwrap(), "10.1.31.255");
/// ```
pub fn broadcast_address(ip: &str, prefix: u8) -> Result<String, Ipv4Error> {
    Ok(format_ipv4(broadcast_bits(to_integer(ip)?, prefix)?))
}

/// Whether `candidate` belongs to the network identified by `network_id`.
///
/// `network_id` need not have its host bits cleared.
pub fn is_member(network_id: &str, prefix: u8, candidate: &str) -> Result<bool, Ipv4Error> {
    let member = contains_bits(to_integer(network_id)?, prefix, to_integer(candidate)?)?;
    log::trace!("is_member({network_id}/{prefix}, {candidate}) = {member}");
    Ok(member)
}

/// Network id of the adjacent subnet of the same size.
pub fn next_subnet(ip: &str, prefix: u8) -> Result<String, Ipv4Error> {
    Ok(format_ipv4(next_subnet_bits(to_integer(ip)?, prefix)?))
}

/// First and last usable host, `None` when the subnet has no usable hosts.
pub fn host_range(ip: &str, prefix: u8) -> Result<Option<(String, String)>, Ipv4Error> {
    if subnet_cardinality(prefix)? == 0 {
        return Ok(None);
    }
    let addr = to_integer(ip)?;
    let first = network_bits(addr, prefix)? + 1;
    let last = broadcast_bits(addr, prefix)? - 1;
    Ok(Some((format_ipv4(first), format_ipv4(last))))
}
