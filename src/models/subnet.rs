//! Address plus prefix length as a single value.

use super::{check_prefix, mask_for_prefix, Ipv4Error};
use crate::parsing::to_integer;
use crate::processing::subnet_cardinality;
use serde::Serialize;
use std::net::Ipv4Addr;

/// An IPv4 address with its CIDR prefix length.
///
/// The address is kept as given; [`Subnet::lo`] and [`Subnet::hi`] derive the
/// network and broadcast addresses from it.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Subnet {
    addr: Ipv4Addr,
    prefix: u8,
    mask: u32,
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Subnet {
    /// Build from dotted-decimal text and a prefix length.
    ///
    /// # Examples
    /// ```
    /// use ipv4_subnet_toolkit::Subnet;
    /// let net = Subnet::new("10.1.23.10", 20).unwrap();
    /// assert_eq!(net.lo().to_string(), "10.1.16.0");
    /// assert_eq!(net.hi().to_string(), "10.1.31.255");
    /// ```
    pub fn new(addr: &str, prefix: u8) -> Result<Subnet, Ipv4Error> {
        Subnet::from_bits(to_integer(addr)?, prefix)
    }

    /// Build from the integer form of an address.
    pub fn from_bits(bits: u32, prefix: u8) -> Result<Subnet, Ipv4Error> {
        let prefix = check_prefix(prefix)?;
        Ok(Subnet {
            addr: Ipv4Addr::from(bits),
            prefix,
            mask: mask_for_prefix(prefix)?,
        })
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & self.mask)
    }

    /// Highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) | !self.mask)
    }

    /// Same subnet with the address cut down to the network id.
    pub fn network(&self) -> Subnet {
        Subnet {
            addr: self.lo(),
            ..*self
        }
    }

    /// Same subnet pointing at its broadcast address.
    pub fn broadcast(&self) -> Subnet {
        Subnet {
            addr: self.hi(),
            ..*self
        }
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        u32::from(ip) & self.mask == u32::from(self.addr) & self.mask
    }

    /// The adjacent subnet of the same size.
    pub fn next(&self) -> Result<Subnet, Ipv4Error> {
        let next_bits = u32::from(self.hi())
            .checked_add(1)
            .ok_or(Ipv4Error::Overflow)?;
        Subnet::from_bits(next_bits, self.prefix)
    }

    /// Usable host count, excluding network and broadcast addresses.
    pub fn hosts(&self) -> u64 {
        subnet_cardinality(self.prefix).unwrap_or(0)
    }

    /// First and last usable host, `None` for /31 and /32.
    pub fn host_range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        if self.hosts() == 0 {
            return None;
        }
        let first = Ipv4Addr::from(u32::from(self.lo()) + 1);
        let last = Ipv4Addr::from(u32::from(self.hi()) - 1);
        Some((first, last))
    }
}

impl std::fmt::Display for Subnet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}
