//! Cheap syntactic checks to route text to the IPv4 or IPv6 path.
//!
//! These are pre-filters, not validators: `"999.1.1.1"` could be IPv4 as far
//! as [`could_be_ipv4`] is concerned.

use serde::Serialize;

/// Which address family a string appears to belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AddressKind {
    Ipv4,
    Ipv6,
    Unknown,
}

impl std::fmt::Display for AddressKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let kind = match self {
            AddressKind::Ipv4 => "IPv4",
            AddressKind::Ipv6 => "IPv6",
            AddressKind::Unknown => "unknown",
        };
        write!(f, "{kind}")
    }
}

fn count(text: &str, needle: char) -> usize {
    text.chars().filter(|&c| c == needle).count()
}

/// Exactly three dots, at most one colon, nothing but digits otherwise.
///
/// # Examples
/// ```
/// use ipv4_subnet_toolkit::could_be_ipv4;
/// assert!(could_be_ipv4("192.168.0.1"));
/// assert!(!could_be_ipv4("192.168.0"));
/// ```
pub fn could_be_ipv4(text: &str) -> bool {
    count(text, '.') == 3
        && count(text, ':') <= 1
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ':')
}

/// Two or more colons and only hex digits, colons and dots.
pub fn could_be_ipv6(text: &str) -> bool {
    count(text, ':') >= 2
        && text
            .chars()
            .all(|c| c.is_ascii_hexdigit() || c == ':' || c == '.')
}

/// Route `text` using [`could_be_ipv4`] first, then [`could_be_ipv6`].
pub fn classify(text: &str) -> AddressKind {
    if could_be_ipv4(text) {
        AddressKind::Ipv4
    } else if could_be_ipv6(text) {
        AddressKind::Ipv6
    } else {
        AddressKind::Unknown
    }
}
