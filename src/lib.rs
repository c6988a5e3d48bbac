//! Maskerade: IPv4/IPv6 network analysis.
//!
//! The engine ([`models`], [`processing`]) parses CIDR blocks, derives their
//! metadata, enumerates hosts and partitions blocks into subnets. The
//! [`session`], [`menu`] and [`output`] modules are the interactive front end.

pub mod config;
pub mod error;
pub mod logging;
pub mod menu;
pub mod models;
pub mod output;
pub mod processing;
pub mod session;

pub use error::NetworkError;
pub use models::{AddressFamily, NetworkBlock};
pub use processing::{describe, hosts, subdivide};
pub use session::Session;
