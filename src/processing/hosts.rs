//! Usable host enumeration.
//!
//! Hosts are produced lazily in ascending order. The sequence is exactly the
//! usable range of the block: the network address is never included, and
//! for IPv4 neither is the broadcast address. IPv4 `/31` and `/32` and IPv6
//! `/128` therefore yield nothing, while an IPv6 `/127` yields one host.

use crate::models::{AddressFamily, HostAddress, NetworkBlock};

/// Host cap applied when the caller gives no limit.
pub const DEFAULT_HOST_LIMIT: u128 = 1000;

/// A capped, lazy sequence of the usable hosts of a block.
#[derive(Debug, Clone)]
pub struct HostListing {
    family: AddressFamily,
    next: u128,
    remaining: u128,
    total: u128,
    shown: u128,
}

impl HostListing {
    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// Number of usable hosts in the block.
    pub fn total(&self) -> u128 {
        self.total
    }

    /// Number of hosts this listing yields.
    pub fn shown(&self) -> u128 {
        self.shown
    }

    /// Number of usable hosts left out by the cap.
    pub fn omitted(&self) -> u128 {
        self.total - self.shown
    }

    pub fn is_truncated(&self) -> bool {
        self.omitted() > 0
    }
}

impl Iterator for HostListing {
    type Item = HostAddress;

    fn next(&mut self) -> Option<HostAddress> {
        if self.remaining == 0 {
            return None;
        }
        let host = HostAddress::new(self.family, self.next);
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next += 1;
        }
        Some(host)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Enumerate the usable hosts of `block`, capped at `limit` or [`DEFAULT_HOST_LIMIT`].
pub fn hosts(block: &NetworkBlock, limit: Option<u128>) -> HostListing {
    let total = block.usable_hosts();
    let shown = total.min(limit.unwrap_or(DEFAULT_HOST_LIMIT));
    let next = block
        .first_host()
        .map(|h| h.bits())
        .unwrap_or_else(|| block.network_bits());
    HostListing {
        family: block.family(),
        next,
        remaining: shown,
        total,
        shown,
    }
}
