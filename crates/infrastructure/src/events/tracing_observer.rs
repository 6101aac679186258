use dnscache_application::ports::CacheObserver;
use dnscache_domain::DomainError;
use std::net::IpAddr;
use tracing::debug;

/// Reports cache activity as `tracing` debug events.
///
/// Wired in only when `logging.cache_events` is enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingCacheObserver;

impl CacheObserver for TracingCacheObserver {
    fn on_cache_hit(&self, hostname: &str, addresses: &[IpAddr]) {
        debug!(hostname = %hostname, addresses = ?addresses, "DNS cache hit");
    }

    fn on_lookup(&self, hostname: &str, addresses: &[IpAddr]) {
        debug!(hostname = %hostname, addresses = ?addresses, "DNS lookup");
    }

    fn on_lookup_failed(&self, hostname: &str, error: &DomainError) {
        debug!(hostname = %hostname, error = %error, "DNS lookup failed");
    }
}
