//! Single host addresses and their renderings.

use super::AddressFamily;
use itertools::Itertools;
use serde::Serialize;
use std::net::IpAddr;

/// Column names of a host row, matching [`HostAddress::values`].
pub const HOST_FIELDS: [&str; 3] = ["Host IP", "Hex", "Binary"];

/// One address of a known family.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct HostAddress {
    family: AddressFamily,
    bits: u128,
}

impl HostAddress {
    pub(crate) fn new(family: AddressFamily, bits: u128) -> HostAddress {
        HostAddress { family, bits }
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn bits(&self) -> u128 {
        self.bits
    }

    pub fn ip(&self) -> IpAddr {
        self.family.to_ip(self.bits)
    }

    /// Hexadecimal integer form, e.g. `0xc0a80101`.
    pub fn hex(&self) -> String {
        format!("{:#x}", self.bits)
    }

    /// Fixed-width binary, dot-grouped octets for IPv4 and colon-grouped
    /// 16-bit groups for IPv6.
    pub fn binary(&self) -> String {
        let (group, sep) = match self.family {
            AddressFamily::V4 => (8, "."),
            AddressFamily::V6 => (16, ":"),
        };
        let width = self.family.width() as usize;
        format!("{:0width$b}", self.bits)
            .chars()
            .chunks(group)
            .into_iter()
            .map(|chunk| chunk.collect::<String>())
            .join(sep)
    }

    /// Row values in [`HOST_FIELDS`] order.
    pub fn values(&self) -> Vec<String> {
        vec![self.to_string(), self.hex(), self.binary()]
    }
}

impl std::fmt::Display for HostAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.ip())
    }
}

impl Serialize for HostAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn test_ipv4_renderings() {
        let host = HostAddress::new(
            AddressFamily::V4,
            u32::from(Ipv4Addr::new(192, 168, 1, 1)) as u128,
        );
        assert_eq!(host.to_string(), "192.168.1.1");
        assert_eq!(host.hex(), "0xc0a80101");
        assert_eq!(host.binary(), "11000000.10101000.00000001.00000001");
    }

    #[test]
    fn test_ipv6_renderings() {
        let host = HostAddress::new(AddressFamily::V6, u128::from("2001:db8::1".parse::<Ipv6Addr>().unwrap()));
        assert_eq!(host.to_string(), "2001:db8::1");
        assert_eq!(host.hex(), "0x20010db8000000000000000000000001");
        let binary = host.binary();
        let groups: Vec<&str> = binary.split(':').collect();
        assert_eq!(groups.len(), 8);
        assert!(groups.iter().all(|g| g.len() == 16));
        assert_eq!(groups[0], "0010000000000001");
        assert_eq!(groups[1], "0000110110111000");
        assert_eq!(groups[7], "0000000000000001");
    }

    #[test]
    fn test_zero_padding() {
        let host = HostAddress::new(AddressFamily::V4, 1);
        assert_eq!(host.hex(), "0x1");
        assert_eq!(host.binary(), "00000000.00000000.00000000.00000001");
        assert_eq!(host.values(), vec!["0.0.0.1", "0x1", "00000000.00000000.00000000.00000001"]);
    }
}
