//! Network analysis logic.
//!
//! This module contains the engine operations over a [`NetworkBlock`](crate::models::NetworkBlock):
//! - [`describe`] - metadata and classification
//! - [`hosts`] - usable host enumeration
//! - [`subnets`] - subnet partitioning

mod describe;
mod hosts;
mod subnets;

// Re-export public functions
pub use describe::{
    categorize, describe, is_private, network_class, scope_category, Category, Ipv4Class,
    Ipv6Scope, NetworkInfo, INFO_FIELDS, NOT_APPLICABLE,
};
pub use hosts::{hosts, HostListing, DEFAULT_HOST_LIMIT};
pub use subnets::{subdivide, SubnetSummary, Subnets, SUBNET_FIELDS};
