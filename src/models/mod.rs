//! Domain models for network analysis.
//!
//! This module contains the core data structures used throughout the application:
//! - [`NetworkBlock`] - IPv4 or IPv6 network in CIDR notation
//! - [`AddressCount`] - exact power-of-two address counts (up to 2^128)
//! - [`HostAddress`] - a single address with text, hex and binary renderings

mod count;
mod host;
mod network;

// Re-export public types
pub use count::AddressCount;
pub use host::{HostAddress, HOST_FIELDS};
pub use network::{
    broadcast_bits, cut_addr, get_cidr_mask, AddressFamily, NetworkBlock, MAX_LENGTH_V4,
    MAX_LENGTH_V6,
};
