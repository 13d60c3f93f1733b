use async_trait::async_trait;
use hostprobe_domain::DomainError;
use std::net::Ipv4Addr;

/// Name resolution backed by the operating system.
///
/// Implementations return IPv4 answers in resolver order, duplicates included.
#[async_trait]
pub trait HostResolver: Send + Sync {
    async fn lookup_ipv4(&self, domain: &str) -> Result<Vec<Ipv4Addr>, DomainError>;
}
