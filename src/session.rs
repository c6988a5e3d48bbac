//! The loaded-network slot of an interactive session.

use crate::error::NetworkError;
use crate::models::NetworkBlock;
use crate::processing::{describe, hosts, subdivide, HostListing, NetworkInfo, Subnets};

/// Holds at most one loaded network. Loading replaces the previous one.
#[derive(Debug, Default, Clone)]
pub struct Session {
    network: Option<NetworkBlock>,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    /// Parse `input` and make it the loaded network.
    ///
    /// On failure the previously loaded network is kept.
    pub fn load(&mut self, input: &str) -> Result<NetworkBlock, NetworkError> {
        let block = NetworkBlock::parse(input)?;
        self.network = Some(block);
        Ok(block)
    }

    /// The loaded network.
    pub fn network(&self) -> Result<NetworkBlock, NetworkError> {
        self.network.ok_or(NetworkError::NoNetworkLoaded)
    }

    pub fn describe(&self) -> Result<NetworkInfo, NetworkError> {
        Ok(describe(&self.network()?))
    }

    pub fn hosts(&self, limit: Option<u128>) -> Result<HostListing, NetworkError> {
        Ok(hosts(&self.network()?, limit))
    }

    pub fn subdivide(&self, new_prefix: u8) -> Result<Subnets, NetworkError> {
        subdivide(&self.network()?, new_prefix)
    }
}
