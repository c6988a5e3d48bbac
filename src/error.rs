//! Errors raised by the network engine.

use thiserror::Error;

/// Recoverable failures of the network engine and session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// Malformed or missing CIDR input.
    #[error("Invalid network format: {0}")]
    InvalidFormat(String),
    /// Subnet request with an unusable new prefix.
    #[error("Invalid prefix: {0}")]
    InvalidPrefix(String),
    /// An operation needed a network before one was loaded.
    #[error("No network loaded")]
    NoNetworkLoaded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NetworkError::InvalidFormat("address required".to_string()).to_string(),
            "Invalid network format: address required"
        );
        assert_eq!(NetworkError::NoNetworkLoaded.to_string(), "No network loaded");
    }
}
