//! DNS resolution through the operating system resolver.

use async_trait::async_trait;
use std::net::IpAddr;
use std::time::Duration;
use tracing::debug;

use crate::domain::resolver::{HostResolver, ResolveError};

/// Resolver backed by `tokio::net::lookup_host`.
///
/// Each lookup is bounded by `timeout`; the lookup only suspends the request
/// that issued it.
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        let lookup = tokio::net::lookup_host((host, 0));

        let addrs = tokio::time::timeout(self.timeout, lookup)
            .await
            .map_err(|_| ResolveError::Timeout(host.to_string()))?
            .map_err(|e| ResolveError::LookupFailed {
                host: host.to_string(),
                reason: e.to_string(),
            })?;

        let ips: Vec<IpAddr> = addrs.map(|addr| addr.ip()).collect();
        debug!("Resolved {} to {:?}", host, ips);

        if ips.is_empty() {
            return Err(ResolveError::NoAddresses(host.to_string()));
        }

        Ok(ips)
    }
}
