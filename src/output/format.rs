//! Integer and octet forms back to dotted-decimal text.

use crate::models::{bits_to_octets, Ipv4Error, Octets, IP4_STRING_SIZE};
use itertools::Itertools;

/// Format octets as `"a.b.c.d"` without leading zeros.
pub fn format_octets(octets: Octets) -> String {
    octets.iter().join(".")
}

/// Format the integer form of an address.
///
/// # Examples
/// ```
/// use ipv4_subnet_toolkit::format_ipv4;
/// assert_eq!(format_ipv4(0), "0.0.0.0");
/// assert_eq!(format_ipv4(3232235521), "192.168.0.1");
/// ```
pub fn format_ipv4(bits: u32) -> String {
    format_octets(bits_to_octets(bits))
}

/// Write the address into `buf` followed by a NUL byte.
///
/// `buf` must hold at least [`IP4_STRING_SIZE`] bytes, enough for
/// `"255.255.255.255\0"`. Returns the length without the terminator.
pub fn format_ipv4_into(bits: u32, buf: &mut [u8]) -> Result<usize, Ipv4Error> {
    if buf.len() < IP4_STRING_SIZE {
        return Err(Ipv4Error::BufferTooSmall(buf.len()));
    }
    let text = format_ipv4(bits);
    let len = text.len();
    buf[..len].copy_from_slice(text.as_bytes());
    buf[len] = 0;
    Ok(len)
}
