//! Resolver with a fixed host table.

use async_trait::async_trait;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};

use crate::domain::resolver::{HostResolver, ResolveError};

/// A resolver that only knows the hosts it was built with.
///
/// Used by tests and offline runs where real DNS is unavailable.
///
/// # Examples
///
/// ```ignore
/// let resolver = StaticResolver::new().with_host("example.com");
/// assert!(resolver.resolve("example.com").await.is_ok());
/// assert!(resolver.resolve("missing.invalid").await.is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    hosts: HashMap<String, Vec<IpAddr>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `host` with a placeholder address.
    pub fn with_host(self, host: &str) -> Self {
        self.with_address(host, IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)))
    }

    /// Registers `host` with a specific address.
    pub fn with_address(mut self, host: &str, addr: IpAddr) -> Self {
        self.hosts
            .entry(host.to_ascii_lowercase())
            .or_default()
            .push(addr);
        self
    }
}

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        self.hosts
            .get(&host.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| ResolveError::LookupFailed {
                host: host.to_string(),
                reason: "unknown host".to_string(),
            })
    }
}
