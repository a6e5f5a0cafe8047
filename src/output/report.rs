//! One-shot summary of an address and prefix, for the terminal or JSON.

use super::format::{format_ipv4, format_octets};
use super::terminal::{format_member, format_row};
use crate::models::{bits_to_octets, Ipv4Error, Subnet};
use crate::parsing::{classify, AddressKind};
use serde::Serialize;

const LABEL_WIDTH: usize = 12;

/// Result of checking a candidate address against the subnet.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    pub candidate: String,
    pub member: bool,
}

/// Every value derived from one address/prefix pair.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    pub subnet: Subnet,
    pub kind: AddressKind,
    pub integer: u32,
    pub mask: String,
    pub network: String,
    pub broadcast: String,
    pub first_host: Option<String>,
    pub last_host: Option<String>,
    pub usable_hosts: u64,
    /// `None` when the subnet is the last one in the address space.
    pub next_subnet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub membership: Option<Membership>,
}

impl SubnetReport {
    /// Compute the report, optionally checking `candidate` for membership.
    pub fn build(
        address: &str,
        prefix: u8,
        candidate: Option<&str>,
    ) -> Result<SubnetReport, Ipv4Error> {
        let subnet = Subnet::new(address, prefix)?;
        log::debug!("building report for {subnet}");

        let membership = match candidate {
            Some(candidate) => {
                let candidate_net = Subnet::new(candidate, prefix)?;
                Some(Membership {
                    candidate: candidate.to_string(),
                    member: subnet.contains(candidate_net.addr()),
                })
            }
            None => None,
        };
        let (first_host, last_host) = match subnet.host_range() {
            Some((first, last)) => (
                Some(format_ipv4(u32::from(first))),
                Some(format_ipv4(u32::from(last))),
            ),
            None => (None, None),
        };
        let next_subnet = subnet
            .next()
            .ok()
            .map(|next| format_ipv4(u32::from(next.addr())));

        Ok(SubnetReport {
            subnet,
            kind: classify(address),
            integer: u32::from(subnet.addr()),
            mask: format_octets(bits_to_octets(subnet.mask())),
            network: format_ipv4(u32::from(subnet.lo())),
            broadcast: format_ipv4(u32::from(subnet.hi())),
            first_host,
            last_host,
            usable_hosts: subnet.hosts(),
            next_subnet,
            membership,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Render as aligned `label value` lines.
    pub fn to_table(&self) -> Vec<String> {
        let none = || "-".to_string();
        let mut rows = vec![
            format_row("address", self.subnet, LABEL_WIDTH),
            format_row("kind", self.kind, LABEL_WIDTH),
            format_row("integer", self.integer, LABEL_WIDTH),
            format_row("mask", &self.mask, LABEL_WIDTH),
            format_row("network", &self.network, LABEL_WIDTH),
            format_row("broadcast", &self.broadcast, LABEL_WIDTH),
            format_row(
                "first host",
                self.first_host.clone().unwrap_or_else(none),
                LABEL_WIDTH,
            ),
            format_row(
                "last host",
                self.last_host.clone().unwrap_or_else(none),
                LABEL_WIDTH,
            ),
            format_row("hosts", self.usable_hosts, LABEL_WIDTH),
            format_row(
                "next subnet",
                self.next_subnet.clone().unwrap_or_else(none),
                LABEL_WIDTH,
            ),
        ];
        if let Some(membership) = &self.membership {
            rows.push(format_row(
                &format!("{} ?", membership.candidate),
                format_member(membership.member),
                LABEL_WIDTH,
            ));
        }
        rows
    }
}
