use async_trait::async_trait;
use dnscache_application::ports::NameResolver;
use dnscache_domain::DomainError;
use std::net::IpAddr;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolves hostnames through the platform resolver (`getaddrinfo`),
/// honouring `/etc/hosts`, nsswitch and the system's DNS settings.
pub struct SystemNameResolver {
    lookup_timeout: Duration,
}

impl SystemNameResolver {
    pub fn new() -> Self {
        Self {
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }
}

impl Default for SystemNameResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameResolver for SystemNameResolver {
    async fn lookup_ip(&self, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        // Port 0 is only there to satisfy the socket address API.
        let lookup = tokio::net::lookup_host((hostname, 0));

        let resolved = match timeout(self.lookup_timeout, lookup).await {
            Ok(Ok(resolved)) => resolved,
            Ok(Err(e)) => {
                debug!(hostname = %hostname, error = %e, "System lookup failed");
                return Err(DomainError::ResolutionFailed(format!("{}: {}", hostname, e)));
            }
            Err(_) => {
                debug!(
                    hostname = %hostname,
                    timeout_ms = self.lookup_timeout.as_millis() as u64,
                    "System lookup timed out"
                );
                return Err(DomainError::QueryTimeout);
            }
        };

        // getaddrinfo can report one address per socket type; keep first occurrence order.
        let mut addresses: Vec<IpAddr> = Vec::new();
        for socket_addr in resolved {
            let ip = socket_addr.ip();
            if !addresses.contains(&ip) {
                addresses.push(ip);
            }
        }

        debug!(hostname = %hostname, count = addresses.len(), "System lookup completed");
        Ok(addresses)
    }
}
