//! Error type shared by every fallible operation in the crate.

/// Reasons an address, prefix or mask was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Ipv4Error {
    #[error("Not an IPv4 address: {0:?}")]
    NotIpv4(String),
    #[error("Expected 4 dot separated octets in {0:?}")]
    SegmentCount(String),
    #[error("Octet {octet:?} in {addr:?} is longer than 3 digits")]
    OctetTooLong { addr: String, octet: String },
    #[error("Invalid address {0:?}")]
    InvalidAddress(String),
    #[error("Network length /{0} is too long, must be 0-32")]
    InvalidPrefix(u8),
    #[error("Mask {0:#010x} is not a contiguous CIDR mask")]
    NonContiguousMask(u32),
    #[error("Output buffer holds {0} bytes, need at least 16")]
    BufferTooSmall(usize),
    #[error("Next subnet calculation overflowed")]
    Overflow,
}
