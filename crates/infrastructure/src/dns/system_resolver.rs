use async_trait::async_trait;
use hostprobe_application::ports::HostResolver;
use hostprobe_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr};
use tracing::debug;

/// Resolves through the operating system resolver (`getaddrinfo`), keeping
/// IPv4 answers only. No retries and no timeout of its own.
#[derive(Debug, Default, Clone)]
pub struct SystemHostResolver;

impl SystemHostResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostResolver for SystemHostResolver {
    async fn lookup_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, DomainError> {
        // Port 0 only satisfies the socket-address API; nothing connects.
        let answers = tokio::net::lookup_host((domain, 0)).await.map_err(|e| {
            debug!(domain, error = %e, "System resolver error");
            DomainError::HostNotFound(domain.to_string())
        })?;

        let addresses: Vec<Ipv4Addr> = answers
            .filter_map(|sa| match sa.ip() {
                IpAddr::V4(v4) => Some(v4),
                IpAddr::V6(_) => None,
            })
            .collect();

        debug!(domain, count = addresses.len(), "System resolver answered");
        Ok(addresses)
    }
}
