use dnscache_domain::DomainError;
use std::net::IpAddr;

/// Optional diagnostics sink injected into the resolver cache.
///
/// Purely advisory: nothing an observer does can change what a lookup
/// returns. Every hook defaults to a no-op.
pub trait CacheObserver: Send + Sync {
    fn on_cache_hit(&self, _hostname: &str, _addresses: &[IpAddr]) {}

    fn on_lookup(&self, _hostname: &str, _addresses: &[IpAddr]) {}

    fn on_lookup_failed(&self, _hostname: &str, _error: &DomainError) {}
}
