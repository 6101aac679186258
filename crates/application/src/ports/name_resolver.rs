use async_trait::async_trait;
use dnscache_domain::DomainError;
use std::net::IpAddr;

/// Backend that turns a hostname into addresses.
///
/// Implementations own their own timeouts; the cache calls them outside
/// of any lock and never retries. The platform resolver adapter,
/// `SystemNameResolver` in the infrastructure crate, is the default backend.
#[async_trait]
pub trait NameResolver: Send + Sync {
    /// Addresses in the order the backend produced them.
    async fn lookup_ip(&self, hostname: &str) -> Result<Vec<IpAddr>, DomainError>;
}
