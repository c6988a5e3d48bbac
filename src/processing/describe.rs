//! Network metadata and address classification.
//!
//! Derives the [`NetworkInfo`] summary of a block: masks, counts, host range,
//! private flag and the IPv4 class or IPv6 scope category.

use crate::models::{AddressCount, AddressFamily, HostAddress, NetworkBlock};
use lazy_static::lazy_static;
use serde::Serialize;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Placeholder shown for a value that does not exist for a block.
pub const NOT_APPLICABLE: &str = "N/A";

/// Column names of a summary row, matching [`NetworkInfo::rows`].
pub const INFO_FIELDS: [&str; 12] = [
    "IP Version",
    "Network Address",
    "Network CIDR",
    "Subnet Mask",
    "Wildcard Mask",
    "Broadcast Address",
    "Network Class",
    "Is Private",
    "Total Addresses",
    "Usable Hosts",
    "First Host",
    "Last Host",
];

const PRIVATE_RANGES_V4: [&str; 14] = [
    "0.0.0.0/8",
    "10.0.0.0/8",
    "127.0.0.0/8",
    "169.254.0.0/16",
    "172.16.0.0/12",
    "192.0.0.0/29",
    "192.0.0.170/31",
    "192.0.2.0/24",
    "192.168.0.0/16",
    "198.18.0.0/15",
    "198.51.100.0/24",
    "203.0.113.0/24",
    "240.0.0.0/4",
    "255.255.255.255/32",
];

const PRIVATE_RANGES_V6: [&str; 9] = [
    "::1/128",
    "::/128",
    "::ffff:0:0/96",
    "100::/64",
    "2001::/23",
    "2001:db8::/32",
    "2001:10::/28",
    "fc00::/7",
    "fe80::/10",
];

lazy_static! {
    static ref PRIVATE_RANGES: Vec<NetworkBlock> = PRIVATE_RANGES_V4
        .iter()
        .chain(PRIVATE_RANGES_V6.iter())
        .map(|cidr| cidr.parse().expect("Invalid private range?"))
        .collect();
}

/// Classful category of an IPv4 network, by first octet.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum Ipv4Class {
    A,
    B,
    C,
    D,
    E,
    Unknown,
}

impl std::fmt::Display for Ipv4Class {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            Ipv4Class::A => "A",
            Ipv4Class::B => "B",
            Ipv4Class::C => "C",
            Ipv4Class::D => "D (Multicast)",
            Ipv4Class::E => "E (Reserved)",
            Ipv4Class::Unknown => "Unknown",
        })
    }
}

/// Intended use of an IPv6 network.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum Ipv6Scope {
    Loopback,
    Unspecified,
    LinkLocal,
    UniqueLocal,
    Multicast,
    Documentation,
    GlobalUnicast,
    SixToFour,
    SixBone,
}

impl std::fmt::Display for Ipv6Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            Ipv6Scope::Loopback => "Loopback",
            Ipv6Scope::Unspecified => "Unspecified/IPv4-mapped",
            Ipv6Scope::LinkLocal => "Link-local",
            Ipv6Scope::UniqueLocal => "Unique Local (Private)",
            Ipv6Scope::Multicast => "Multicast",
            Ipv6Scope::Documentation => "Documentation",
            Ipv6Scope::GlobalUnicast => "Global Unicast",
            Ipv6Scope::SixToFour => "6to4",
            Ipv6Scope::SixBone => "6bone (Historic)",
        })
    }
}

/// Class (IPv4) or scope (IPv6) of a network.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum Category {
    Class(Ipv4Class),
    Scope(Ipv6Scope),
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Category::Class(class) => write!(f, "{class}"),
            Category::Scope(scope) => write!(f, "{scope}"),
        }
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Class of an IPv4 address, from its first octet.
pub fn network_class(addr: Ipv4Addr) -> Ipv4Class {
    match addr.octets()[0] {
        1..=126 => Ipv4Class::A,
        128..=191 => Ipv4Class::B,
        192..=223 => Ipv4Class::C,
        224..=239 => Ipv4Class::D,
        240..=255 => Ipv4Class::E,
        _ => Ipv4Class::Unknown,
    }
}

/// Scope of an IPv6 address, matched on its canonical compressed text.
///
/// Longer prefixes are tested before the shorter ones that would also match.
pub fn scope_category(addr: Ipv6Addr) -> Ipv6Scope {
    let text = addr.to_string();
    if text == "::1" {
        Ipv6Scope::Loopback
    } else if text.starts_with("::") {
        Ipv6Scope::Unspecified
    } else if text.starts_with("fe80:") {
        Ipv6Scope::LinkLocal
    } else if text.starts_with("fc") || text.starts_with("fd") {
        Ipv6Scope::UniqueLocal
    } else if text.starts_with("ff") {
        Ipv6Scope::Multicast
    } else if text.starts_with("2001:db8:") {
        Ipv6Scope::Documentation
    } else if text.starts_with("2001:") {
        Ipv6Scope::GlobalUnicast
    } else if text.starts_with("2002:") {
        Ipv6Scope::SixToFour
    } else if text.starts_with("3ffe:") {
        Ipv6Scope::SixBone
    } else {
        Ipv6Scope::GlobalUnicast
    }
}

/// Category of a block's network address.
pub fn categorize(block: &NetworkBlock) -> Category {
    match block.network_address() {
        IpAddr::V4(v4) => Category::Class(network_class(v4)),
        IpAddr::V6(v6) => Category::Scope(scope_category(v6)),
    }
}

/// True if the block's network address lies in a reserved private range.
pub fn is_private(block: &NetworkBlock) -> bool {
    PRIVATE_RANGES
        .iter()
        .any(|range| range.contains(block.network_address()))
}

/// Derived metadata of a network block.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NetworkInfo {
    #[serde(rename = "IP Version")]
    pub ip_version: AddressFamily,
    #[serde(rename = "Network Address")]
    pub network_address: IpAddr,
    #[serde(rename = "Network CIDR")]
    pub network_cidr: NetworkBlock,
    #[serde(rename = "Subnet Mask")]
    pub netmask: IpAddr,
    #[serde(rename = "Wildcard Mask")]
    pub wildcard_mask: IpAddr,
    /// `None` for IPv6.
    #[serde(rename = "Broadcast Address")]
    pub broadcast: Option<IpAddr>,
    #[serde(rename = "Network Class")]
    pub category: Category,
    #[serde(rename = "Is Private")]
    pub is_private: bool,
    #[serde(rename = "Total Addresses")]
    pub total_addresses: AddressCount,
    #[serde(rename = "Usable Hosts", serialize_with = "serialize_decimal")]
    pub usable_hosts: u128,
    #[serde(rename = "First Host")]
    pub first_host: Option<HostAddress>,
    #[serde(rename = "Last Host")]
    pub last_host: Option<HostAddress>,
}

fn serialize_decimal<S>(value: &u128, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    serializer.collect_str(value)
}

impl NetworkInfo {
    /// Broadcast address text, with an explanation for IPv6.
    pub fn broadcast_text(&self) -> String {
        match self.broadcast {
            Some(addr) => addr.to_string(),
            None => format!("{NOT_APPLICABLE} (IPv6 doesn't use broadcast)"),
        }
    }

    /// Values in [`INFO_FIELDS`] order.
    pub fn values(&self) -> Vec<String> {
        let or_na = |host: Option<HostAddress>| {
            host.map(|h| h.to_string())
                .unwrap_or_else(|| NOT_APPLICABLE.to_string())
        };
        vec![
            self.ip_version.to_string(),
            self.network_address.to_string(),
            self.network_cidr.to_string(),
            self.netmask.to_string(),
            self.wildcard_mask.to_string(),
            self.broadcast_text(),
            self.category.to_string(),
            self.is_private.to_string(),
            self.total_addresses.to_string(),
            self.usable_hosts.to_string(),
            or_na(self.first_host),
            or_na(self.last_host),
        ]
    }

    /// Labelled values, in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        INFO_FIELDS.iter().copied().zip(self.values()).collect()
    }
}

/// Derive the metadata of a network block.
pub fn describe(block: &NetworkBlock) -> NetworkInfo {
    NetworkInfo {
        ip_version: block.family(),
        network_address: block.network_address(),
        network_cidr: *block,
        netmask: block.netmask(),
        wildcard_mask: block.hostmask(),
        broadcast: block.broadcast(),
        category: categorize(block),
        is_private: is_private(block),
        total_addresses: block.total_addresses(),
        usable_hosts: block.usable_hosts(),
        first_host: block.first_host(),
        last_host: block.last_host(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(cidr: &str) -> NetworkInfo {
        describe(&cidr.parse().unwrap())
    }

    #[test]
    fn test_describe_ipv4_class_c() {
        let i = info("192.168.1.0/24");
        assert_eq!(i.ip_version, AddressFamily::V4);
        assert_eq!(i.netmask.to_string(), "255.255.255.0");
        assert_eq!(i.wildcard_mask.to_string(), "0.0.0.255");
        assert_eq!(i.broadcast_text(), "192.168.1.255");
        assert_eq!(i.first_host.unwrap().to_string(), "192.168.1.1");
        assert_eq!(i.last_host.unwrap().to_string(), "192.168.1.254");
        assert_eq!(i.category.to_string(), "C");
        assert!(i.is_private);
        assert_eq!(i.total_addresses.to_string(), "256");
        assert_eq!(i.usable_hosts, 254);
    }

    #[test]
    fn test_describe_ipv6_documentation() {
        let i = info("2001:db8::/32");
        assert_eq!(i.category, Category::Scope(Ipv6Scope::Documentation));
        assert_eq!(i.total_addresses.to_u128(), Some(1u128 << 96));
        assert_eq!(i.usable_hosts, (1u128 << 96) - 1);
        assert_eq!(i.broadcast, None);
        assert_eq!(i.broadcast_text(), "N/A (IPv6 doesn't use broadcast)");
        assert!(i.is_private);
    }

    #[test]
    fn test_network_class() {
        let class = |s: &str| network_class(s.parse().unwrap()).to_string();
        assert_eq!(class("0.0.0.0"), "Unknown");
        assert_eq!(class("1.0.0.0"), "A");
        assert_eq!(class("126.255.0.0"), "A");
        assert_eq!(class("127.0.0.0"), "Unknown");
        assert_eq!(class("128.0.0.0"), "B");
        assert_eq!(class("191.255.0.0"), "B");
        assert_eq!(class("192.0.0.0"), "C");
        assert_eq!(class("223.0.0.0"), "C");
        assert_eq!(class("224.0.0.0"), "D (Multicast)");
        assert_eq!(class("239.0.0.0"), "D (Multicast)");
        assert_eq!(class("240.0.0.0"), "E (Reserved)");
        assert_eq!(class("255.255.255.255"), "E (Reserved)");
    }

    #[test]
    fn test_scope_category_order() {
        let scope = |s: &str| scope_category(s.parse().unwrap());
        assert_eq!(scope("::1"), Ipv6Scope::Loopback);
        assert_eq!(scope("::"), Ipv6Scope::Unspecified);
        assert_eq!(scope("::ffff:10.0.0.0"), Ipv6Scope::Unspecified);
        assert_eq!(scope("fe80::"), Ipv6Scope::LinkLocal);
        assert_eq!(scope("fc00::"), Ipv6Scope::UniqueLocal);
        assert_eq!(scope("fd12:3456::"), Ipv6Scope::UniqueLocal);
        assert_eq!(scope("ff02::1"), Ipv6Scope::Multicast);
        assert_eq!(scope("2001:db8::"), Ipv6Scope::Documentation);
        assert_eq!(scope("2001:db8:1::"), Ipv6Scope::Documentation);
        assert_eq!(scope("2001:4860::"), Ipv6Scope::GlobalUnicast);
        assert_eq!(scope("2002:c000:204::"), Ipv6Scope::SixToFour);
        assert_eq!(scope("3ffe:1::"), Ipv6Scope::SixBone);
        assert_eq!(scope("2600::"), Ipv6Scope::GlobalUnicast);
        assert_eq!(Ipv6Scope::Unspecified.to_string(), "Unspecified/IPv4-mapped");
    }

    #[test]
    fn test_is_private() {
        let private = |s: &str| info(s).is_private;
        assert!(private("10.20.0.0/16"));
        assert!(private("172.16.0.0/12"));
        assert!(private("172.31.255.0/24"));
        assert!(!private("172.32.0.0/16"));
        assert!(private("192.168.0.0/16"));
        assert!(private("127.0.0.0/8"));
        assert!(private("169.254.1.0/24"));
        assert!(!private("8.8.8.0/24"));
        assert!(!private("100.64.0.0/10"));
        assert!(private("fd00::/8"));
        assert!(private("fe80::/64"));
        assert!(private("::1/128"));
        assert!(!private("2600::/16"));
        assert!(private("::ffff:10.0.0.0/104"));
        assert!(!private("ff02::/16"));
    }

    #[test]
    fn test_tiny_networks() {
        let i = info("10.0.0.7/32");
        assert_eq!(i.usable_hosts, 0);
        assert_eq!(i.first_host, None);
        assert_eq!(i.values()[10], "N/A");
        assert_eq!(i.values()[11], "N/A");

        let i = info("::/0");
        assert_eq!(
            i.total_addresses.to_string(),
            "340282366920938463463374607431768211456"
        );
        assert_eq!(i.usable_hosts, u128::MAX);
    }

    #[test]
    fn test_rows_and_json() {
        let i = info("10.0.0.0/8");
        let rows = i.rows();
        assert_eq!(rows.len(), INFO_FIELDS.len());
        assert_eq!(rows[0], ("IP Version", "IPv4".to_string()));
        assert_eq!(rows[2], ("Network CIDR", "10.0.0.0/8".to_string()));
        assert_eq!(rows[6], ("Network Class", "A".to_string()));
        assert_eq!(rows[8], ("Total Addresses", "16777216".to_string()));
        assert_eq!(rows[9], ("Usable Hosts", "16777214".to_string()));

        let json: serde_json::Value = serde_json::to_value(&i).unwrap();
        assert_eq!(json["IP Version"], "IPv4");
        assert_eq!(json["Network CIDR"], "10.0.0.0/8");
        assert_eq!(json["Is Private"], true);
        assert_eq!(json["Usable Hosts"], "16777214");
        assert_eq!(json["First Host"], "10.0.0.1");
    }
}
