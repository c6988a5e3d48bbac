//! Subnet partitioning.
//!
//! Splits a block into equal, contiguous subnets of a longer prefix. The
//! subnets are produced lazily since an IPv6 split can yield up to 2^128 of
//! them; callers cap consumption.

use crate::error::NetworkError;
use crate::models::{AddressCount, AddressFamily, HostAddress, NetworkBlock};
use crate::processing::describe::NOT_APPLICABLE;
use serde::Serialize;
use std::net::IpAddr;

/// Column names of a subnet row, matching [`SubnetSummary::values`].
pub const SUBNET_FIELDS: [&str; 8] = [
    "Subnet",
    "Usable Hosts",
    "Network Address",
    "First Host",
    "Last Host",
    "Broadcast Address",
    "Subnet Mask",
    "Subnet Mask (Decimal)",
];

/// Lazy, ordered sequence of the subnets of a block.
#[derive(Debug, Clone)]
pub struct Subnets {
    family: AddressFamily,
    new_prefix: u8,
    step: u128,
    next: Option<u128>,
    last: u128,
    total: AddressCount,
}

impl Subnets {
    /// Number of subnets in the full partition, `2^(new_prefix - prefix)`.
    pub fn total(&self) -> AddressCount {
        self.total
    }
}

impl Iterator for Subnets {
    type Item = NetworkBlock;

    fn next(&mut self) -> Option<NetworkBlock> {
        let current = self.next?;
        self.next = current
            .checked_add(self.step)
            .filter(|next| *next <= self.last);
        Some(NetworkBlock::from_bits(self.family, current, self.new_prefix))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(next) => ((self.last - next) / self.step).checked_add(1),
            None => Some(0),
        };
        match remaining.and_then(|n| usize::try_from(n).ok()) {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

/// Split `block` into subnets of length `new_prefix`.
///
/// # Returns
/// * `Ok(Subnets)` - the lazy partition, in ascending address order
/// * `Err(NetworkError::InvalidPrefix)` - if `new_prefix` is not longer than the
///   current prefix or exceeds the family width
pub fn subdivide(block: &NetworkBlock, new_prefix: u8) -> Result<Subnets, NetworkError> {
    let family = block.family();
    if new_prefix <= block.prefix() {
        return Err(NetworkError::InvalidPrefix(format!(
            "new prefix must exceed current prefix (/{new_prefix} <= /{})",
            block.prefix()
        )));
    }
    if new_prefix > family.width() {
        return Err(NetworkError::InvalidPrefix(format!(
            "new prefix /{new_prefix} exceeds the {family} maximum of /{}",
            family.width()
        )));
    }
    Ok(Subnets {
        family,
        new_prefix,
        step: 1u128 << (family.width() - new_prefix),
        next: Some(block.network_bits()),
        last: block.last_bits(),
        total: AddressCount::power_of_two(new_prefix - block.prefix()),
    })
}

/// Per-subnet view, derived with the same rules as the network summary.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SubnetSummary {
    #[serde(rename = "Subnet")]
    pub subnet: NetworkBlock,
    #[serde(rename = "Usable Hosts", serialize_with = "serialize_decimal")]
    pub usable_hosts: u128,
    #[serde(rename = "Network Address")]
    pub network_address: IpAddr,
    #[serde(rename = "First Host")]
    pub first_host: Option<HostAddress>,
    #[serde(rename = "Last Host")]
    pub last_host: Option<HostAddress>,
    #[serde(rename = "Broadcast Address")]
    pub broadcast: Option<IpAddr>,
    #[serde(rename = "Subnet Mask")]
    pub netmask: IpAddr,
    #[serde(rename = "Subnet Mask (Decimal)", serialize_with = "serialize_decimal")]
    pub netmask_decimal: u128,
}

fn serialize_decimal<S>(value: &u128, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    serializer.collect_str(value)
}

impl From<&NetworkBlock> for SubnetSummary {
    fn from(block: &NetworkBlock) -> Self {
        SubnetSummary {
            subnet: *block,
            usable_hosts: block.usable_hosts(),
            network_address: block.network_address(),
            first_host: block.first_host(),
            last_host: block.last_host(),
            broadcast: block.broadcast(),
            netmask: block.netmask(),
            netmask_decimal: block.netmask_bits(),
        }
    }
}

impl SubnetSummary {
    /// Values in [`SUBNET_FIELDS`] order.
    pub fn values(&self) -> Vec<String> {
        let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_APPLICABLE.to_string());
        vec![
            self.subnet.to_string(),
            self.usable_hosts.to_string(),
            self.network_address.to_string(),
            or_na(self.first_host.map(|h| h.to_string())),
            or_na(self.last_host.map(|h| h.to_string())),
            or_na(self.broadcast.map(|b| b.to_string())),
            self.netmask.to_string(),
            self.netmask_decimal.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(cidr: &str) -> NetworkBlock {
        cidr.parse().unwrap()
    }

    #[test]
    fn test_subdivide_24_into_26() {
        let parent = block("192.168.0.0/24");
        let subnets = subdivide(&parent, 26).unwrap();
        assert_eq!(subnets.total().to_u128(), Some(4));
        let all: Vec<NetworkBlock> = subnets.collect();
        let names: Vec<String> = all.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "192.168.0.0/26",
                "192.168.0.64/26",
                "192.168.0.128/26",
                "192.168.0.192/26"
            ]
        );
        assert!(all.iter().all(|s| s.usable_hosts() == 62));
    }

    #[test]
    fn test_subdivide_rejects_bad_prefix() {
        let parent = block("10.0.0.0/16");
        for bad in [0, 8, 15, 16] {
            assert!(matches!(
                subdivide(&parent, bad),
                Err(NetworkError::InvalidPrefix(_))
            ));
        }
        assert!(matches!(
            subdivide(&parent, 33),
            Err(NetworkError::InvalidPrefix(_))
        ));
        assert!(matches!(
            subdivide(&block("2001:db8::/64"), 129),
            Err(NetworkError::InvalidPrefix(_))
        ));
        assert!(matches!(
            subdivide(&block("10.0.0.1/32"), 32),
            Err(NetworkError::InvalidPrefix(_))
        ));
    }

    #[test]
    fn test_subdivide_covers_parent() {
        let parent = block("10.1.0.0/20");
        for new_prefix in 21..=28 {
            let subs: Vec<NetworkBlock> = subdivide(&parent, new_prefix).unwrap().collect();
            assert_eq!(subs.len(), 1 << (new_prefix - 20));
            assert_eq!(subs[0].network_bits(), parent.network_bits());
            assert_eq!(subs.last().unwrap().last_bits(), parent.last_bits());
            for pair in subs.windows(2) {
                assert_eq!(pair[0].last_bits() + 1, pair[1].network_bits());
            }
        }
    }

    #[test]
    fn test_subdivide_top_of_address_space() {
        let subs: Vec<String> = subdivide(&block("255.255.255.0/24"), 25)
            .unwrap()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(subs, vec!["255.255.255.0/25", "255.255.255.128/25"]);

        let subs: Vec<NetworkBlock> = subdivide(&block("::/0"), 1).unwrap().collect();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[1].to_string(), "8000::/1");
    }

    #[test]
    fn test_subdivide_huge_ipv6_is_lazy() {
        let mut subs = subdivide(&block("::/0"), 128).unwrap();
        assert_eq!(
            subs.total().to_string(),
            "340282366920938463463374607431768211456"
        );
        assert_eq!(subs.size_hint().1, None);
        assert_eq!(subs.next().unwrap().to_string(), "::/128");
        assert_eq!(subs.next().unwrap().to_string(), "::1/128");

        let subs = subdivide(&block("2001:db8::/32"), 64).unwrap();
        let first: Vec<String> = subs.take(3).map(|s| s.to_string()).collect();
        assert_eq!(first, vec!["2001:db8::/64", "2001:db8:0:1::/64", "2001:db8:0:2::/64"]);
    }

    #[test]
    fn test_subnet_summary_ipv4() {
        let summary = SubnetSummary::from(&block("192.168.0.64/26"));
        assert_eq!(
            summary.values(),
            vec![
                "192.168.0.64/26",
                "62",
                "192.168.0.64",
                "192.168.0.65",
                "192.168.0.126",
                "192.168.0.127",
                "255.255.255.192",
                "4294967232"
            ]
        );
        let summary = SubnetSummary::from(&block("10.0.0.0/31"));
        assert_eq!(summary.values()[3], "N/A");
        assert_eq!(summary.values()[5], "10.0.0.1");
    }

    #[test]
    fn test_subnet_summary_ipv6() {
        let summary = SubnetSummary::from(&block("2001:db8::/126"));
        assert_eq!(summary.usable_hosts, 3);
        assert_eq!(summary.broadcast, None);
        assert_eq!(summary.values()[4], "2001:db8::3");
        assert_eq!(summary.values()[5], "N/A");
    }
}
