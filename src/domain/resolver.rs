//! Hostname resolution contract used to validate shortened URLs.

use async_trait::async_trait;
use std::net::IpAddr;

/// Errors that can occur while resolving a hostname.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Lookup failed for {host}: {reason}")]
    LookupFailed { host: String, reason: String },

    #[error("No addresses found for {0}")]
    NoAddresses(String),

    #[error("Lookup timed out for {0}")]
    Timeout(String),
}

/// Resolves hostnames to IP addresses.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - System resolver via `tokio::net::lookup_host`
/// - [`crate::infrastructure::dns::StaticResolver`] - Fixed host table for tests and offline runs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Resolves `host` to at least one address.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the host does not resolve.
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError>;
}
