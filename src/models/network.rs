//! CIDR network blocks for IPv4 and IPv6.
//!
//! Provides [`NetworkBlock`] for representing a network address with its prefix
//! length, along with the mask helpers shared by both address families. All
//! arithmetic is done on `u128`; IPv4 values live in the low 32 bits.

use super::{AddressCount, HostAddress};
use crate::error::NetworkError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum length for an IPv6 prefix (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

lazy_static! {
    static ref PREFIX_RE: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
}

/// IP address family of a network.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// Address width in bits.
    pub fn width(self) -> u8 {
        match self {
            AddressFamily::V4 => MAX_LENGTH_V4,
            AddressFamily::V6 => MAX_LENGTH_V6,
        }
    }

    /// All address bits of this family set.
    pub fn all_ones(self) -> u128 {
        match self {
            AddressFamily::V4 => u32::MAX as u128,
            AddressFamily::V6 => u128::MAX,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AddressFamily::V4 => "IPv4",
            AddressFamily::V6 => "IPv6",
        }
    }

    /// Convert raw address bits to a std address of this family.
    pub fn to_ip(self, bits: u128) -> IpAddr {
        match self {
            AddressFamily::V4 => IpAddr::V4(Ipv4Addr::from((bits & self.all_ones()) as u32)),
            AddressFamily::V6 => IpAddr::V6(Ipv6Addr::from(bits)),
        }
    }

    fn of(addr: &IpAddr) -> AddressFamily {
        match addr {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }
}

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for AddressFamily {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

/// Convert a prefix length to a netmask for the given family.
///
/// Lengths beyond the family width are clamped to a full mask.
///
/// # Examples
/// ```
/// use maskerade::models::{get_cidr_mask, AddressFamily};
/// assert_eq!(get_cidr_mask(AddressFamily::V4, 24), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(family: AddressFamily, len: u8) -> u128 {
    let right_len = family.width().saturating_sub(len) as u32;
    u128::MAX.checked_shl(right_len).unwrap_or(0) & family.all_ones()
}

/// Get the network address for the given address bits and prefix length.
pub fn cut_addr(family: AddressFamily, bits: u128, len: u8) -> u128 {
    bits & get_cidr_mask(family, len)
}

/// Get the highest address (all host bits set) for the given bits and prefix length.
pub fn broadcast_bits(family: AddressFamily, bits: u128, len: u8) -> u128 {
    let mask = get_cidr_mask(family, len);
    (bits & mask) | (!mask & family.all_ones())
}

/// A network in CIDR notation, always stored with its host bits cleared.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct NetworkBlock {
    family: AddressFamily,
    network: u128,
    prefix: u8,
}

impl NetworkBlock {
    /// Create a block from an address and prefix length, masking any host bits.
    pub fn new(addr: IpAddr, prefix: u8) -> Result<NetworkBlock, NetworkError> {
        let family = AddressFamily::of(&addr);
        if prefix > family.width() {
            return Err(NetworkError::InvalidFormat(format!(
                "prefix length /{prefix} out of range for {family} (0-{})",
                family.width()
            )));
        }
        let bits = match addr {
            IpAddr::V4(v4) => u32::from(v4) as u128,
            IpAddr::V6(v6) => u128::from(v6),
        };
        Ok(NetworkBlock::from_bits(family, bits, prefix))
    }

    /// Build a block from raw bits. `prefix` must not exceed the family width.
    pub(crate) fn from_bits(family: AddressFamily, bits: u128, prefix: u8) -> NetworkBlock {
        debug_assert!(prefix <= family.width());
        NetworkBlock {
            family,
            network: cut_addr(family, bits, prefix),
            prefix,
        }
    }

    /// Parse a CIDR string such as `192.168.1.5/24` or `2001:db8::/32`.
    ///
    /// Parsing is non-strict: host bits in the address are cleared rather than rejected.
    pub fn parse(input: &str) -> Result<NetworkBlock, NetworkError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(NetworkError::InvalidFormat("address required".to_string()));
        }
        let (addr_part, prefix_part) = input
            .split_once('/')
            .ok_or_else(|| NetworkError::InvalidFormat("missing CIDR prefix".to_string()))?;

        let addr = if addr_part.contains(':') {
            addr_part.parse::<Ipv6Addr>().map(IpAddr::V6)
        } else {
            addr_part.parse::<Ipv4Addr>().map(IpAddr::V4)
        }
        .map_err(|_| NetworkError::InvalidFormat(format!("invalid IP address: '{addr_part}'")))?;

        if !PREFIX_RE.is_match(prefix_part) {
            return Err(NetworkError::InvalidFormat(format!(
                "invalid prefix length: '{prefix_part}'"
            )));
        }
        // Leading zeros are allowed, so the digit count says nothing about range.
        let prefix = prefix_part
            .parse::<u32>()
            .ok()
            .and_then(|p| u8::try_from(p).ok())
            .ok_or_else(|| {
                NetworkError::InvalidFormat(format!("prefix length /{prefix_part} out of range"))
            })?;

        NetworkBlock::new(addr, prefix)
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Number of host bits (`width - prefix`).
    pub fn host_bits(&self) -> u8 {
        self.family.width() - self.prefix
    }

    pub fn network_bits(&self) -> u128 {
        self.network
    }

    pub fn netmask_bits(&self) -> u128 {
        get_cidr_mask(self.family, self.prefix)
    }

    pub fn hostmask_bits(&self) -> u128 {
        !self.netmask_bits() & self.family.all_ones()
    }

    /// Highest address in the block.
    pub fn last_bits(&self) -> u128 {
        broadcast_bits(self.family, self.network, self.prefix)
    }

    pub fn network_address(&self) -> IpAddr {
        self.family.to_ip(self.network)
    }

    pub fn netmask(&self) -> IpAddr {
        self.family.to_ip(self.netmask_bits())
    }

    /// Wildcard mask, the complement of the netmask.
    pub fn hostmask(&self) -> IpAddr {
        self.family.to_ip(self.hostmask_bits())
    }

    /// Broadcast address. IPv6 has no broadcast concept and returns `None`.
    pub fn broadcast(&self) -> Option<IpAddr> {
        match self.family {
            AddressFamily::V4 => Some(self.family.to_ip(self.last_bits())),
            AddressFamily::V6 => None,
        }
    }

    /// Total number of addresses, `2^(width - prefix)`.
    pub fn total_addresses(&self) -> AddressCount {
        AddressCount::power_of_two(self.host_bits())
    }

    /// Number of assignable addresses.
    ///
    /// IPv4 reserves the network and broadcast addresses, IPv6 only the network address.
    pub fn usable_hosts(&self) -> u128 {
        let total = self.total_addresses();
        let reserved = match self.family {
            AddressFamily::V4 => 2,
            AddressFamily::V6 => 1,
        };
        if total.exceeds(reserved) {
            total.saturating_sub(reserved)
        } else {
            0
        }
    }

    /// First usable host, `None` if the block has no usable hosts.
    pub fn first_host(&self) -> Option<HostAddress> {
        if self.usable_hosts() == 0 {
            return None;
        }
        Some(HostAddress::new(self.family, self.network + 1))
    }

    /// Last usable host, `None` if the block has no usable hosts.
    pub fn last_host(&self) -> Option<HostAddress> {
        if self.usable_hosts() == 0 {
            return None;
        }
        let last = match self.family {
            AddressFamily::V4 => self.last_bits() - 1,
            AddressFamily::V6 => self.last_bits(),
        };
        Some(HostAddress::new(self.family, last))
    }

    /// Check if address bits of the same family fall within this block.
    pub fn contains_bits(&self, family: AddressFamily, bits: u128) -> bool {
        self.family == family && cut_addr(self.family, bits, self.prefix) == self.network
    }

    /// Check if an IP address is contained within this block.
    pub fn contains(&self, addr: IpAddr) -> bool {
        match NetworkBlock::new(addr, self.family.width()) {
            Ok(host) => self.contains_bits(host.family, host.network),
            Err(_) => false,
        }
    }
}

impl FromStr for NetworkBlock {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NetworkBlock::parse(s)
    }
}

impl std::fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network_address(), self.prefix)
    }
}

impl Serialize for NetworkBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for NetworkBlock {
    fn deserialize<D>(deserializer: D) -> Result<NetworkBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetworkBlock::parse(&s).map_err(|e| de::Error::custom(format!("{e}: {s}")))
    }
}
