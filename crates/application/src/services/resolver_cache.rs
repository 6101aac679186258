use dnscache_domain::{CacheStats, DomainError};
use rustc_hash::FxHashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

use crate::ports::{CacheObserver, NameResolver};

pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_secs(2);
pub const DEFAULT_CAPACITY: usize = 64;

#[derive(Default)]
struct CacheMetrics {
    hits: AtomicU64,
    misses: AtomicU64,
    lookups: AtomicU64,
    lookup_failures: AtomicU64,
    refresh_cycles: AtomicU64,
}

/// Cache-first hostname resolution backed by a [`NameResolver`].
///
/// Entries are created on the first miss for a hostname and overwritten by
/// every successful re-resolution; nothing is ever evicted. The map lock is
/// only held around the map access itself, backend lookups always run
/// outside of it. Concurrent misses for the same hostname are not
/// coalesced: each caller resolves and the last write wins.
pub struct ResolverCache {
    resolver: Arc<dyn NameResolver>,
    entries: RwLock<FxHashMap<String, Arc<Vec<IpAddr>>>>,
    observer: Option<Arc<dyn CacheObserver>>,
    refresh_delay: Duration,
    metrics: CacheMetrics,
}

impl ResolverCache {
    /// Callers without a backend of their own pass `SystemNameResolver`.
    pub fn new(resolver: Arc<dyn NameResolver>) -> Self {
        Self {
            resolver,
            entries: RwLock::new(FxHashMap::with_capacity_and_hasher(
                DEFAULT_CAPACITY,
                Default::default(),
            )),
            observer: None,
            refresh_delay: DEFAULT_REFRESH_DELAY,
            metrics: CacheMetrics::default(),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn CacheObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Pause inserted between two hostnames during [`refresh_all`](Self::refresh_all).
    pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.entries = RwLock::new(FxHashMap::with_capacity_and_hasher(
            capacity,
            Default::default(),
        ));
        self
    }

    /// Cached addresses for `hostname`, resolving and storing them on a miss.
    pub async fn fetch_all(&self, hostname: &str) -> Result<Arc<Vec<IpAddr>>, DomainError> {
        let cached = self.entries.read().await.get(hostname).cloned();

        if let Some(addresses) = cached {
            self.metrics.hits.fetch_add(1, Ordering::Relaxed);
            if let Some(observer) = &self.observer {
                observer.on_cache_hit(hostname, &addresses);
            }
            return Ok(addresses);
        }

        self.metrics.misses.fetch_add(1, Ordering::Relaxed);
        self.resolve(hostname).await
    }

    /// First address of [`fetch_all`](Self::fetch_all), `None` when the
    /// backend returned an empty list.
    pub async fn fetch_one(&self, hostname: &str) -> Result<Option<IpAddr>, DomainError> {
        let addresses = self.fetch_all(hostname).await?;
        Ok(addresses.first().copied())
    }

    /// Textual form of [`fetch_one`](Self::fetch_one), empty when there is no address.
    pub async fn fetch_one_as_text(&self, hostname: &str) -> Result<String, DomainError> {
        Ok(self
            .fetch_one(hostname)
            .await?
            .map(|ip| ip.to_string())
            .unwrap_or_default())
    }

    /// Live lookup that overwrites the entry on success.
    ///
    /// A failed lookup leaves any existing entry in place.
    pub async fn resolve(&self, hostname: &str) -> Result<Arc<Vec<IpAddr>>, DomainError> {
        let addresses = Arc::new(self.lookup_ip(hostname).await?);

        self.entries
            .write()
            .await
            .insert(hostname.to_string(), Arc::clone(&addresses));

        Ok(addresses)
    }

    /// Live lookup through the backend, without touching the cache.
    pub async fn lookup_ip(&self, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.metrics.lookups.fetch_add(1, Ordering::Relaxed);

        match self.resolver.lookup_ip(hostname).await {
            Ok(addresses) => {
                if let Some(observer) = &self.observer {
                    observer.on_lookup(hostname, &addresses);
                }
                Ok(addresses)
            }
            Err(e) => {
                self.metrics.lookup_failures.fetch_add(1, Ordering::Relaxed);
                if let Some(observer) = &self.observer {
                    observer.on_lookup_failed(hostname, &e);
                }
                Err(e)
            }
        }
    }

    /// Re-resolve every cached hostname, one at a time.
    ///
    /// The key set is snapshotted up front so no lock is held while the
    /// backend is queried. Failures are logged and the stale entry is kept.
    #[instrument(skip(self), level = "debug")]
    pub async fn refresh_all(&self) {
        let hostnames = self.hostnames().await;

        if hostnames.is_empty() {
            debug!("No cached hostnames to refresh");
            self.metrics.refresh_cycles.fetch_add(1, Ordering::Relaxed);
            return;
        }

        let mut refreshed = 0usize;
        let mut failed = 0usize;

        for (i, hostname) in hostnames.iter().enumerate() {
            if i > 0 && !self.refresh_delay.is_zero() {
                sleep(self.refresh_delay).await;
            }

            match self.resolve(hostname).await {
                Ok(addresses) => {
                    debug!(hostname = %hostname, addresses = ?addresses, "Cache entry refreshed");
                    refreshed += 1;
                }
                Err(e) => {
                    warn!(
                        hostname = %hostname,
                        error = %e,
                        "Failed to refresh cache entry, keeping previous addresses"
                    );
                    failed += 1;
                }
            }
        }

        self.metrics.refresh_cycles.fetch_add(1, Ordering::Relaxed);

        info!(
            refreshed = refreshed,
            failed = failed,
            cache_size = hostnames.len(),
            "Cache refresh cycle completed"
        );
    }

    /// Entry for `hostname` if present; never resolves and is not counted
    /// as a hit or miss.
    pub async fn cached(&self, hostname: &str) -> Option<Arc<Vec<IpAddr>>> {
        self.entries.read().await.get(hostname).cloned()
    }

    pub async fn hostnames(&self) -> Vec<String> {
        self.entries.read().await.keys().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len().await,
            hits: self.metrics.hits.load(Ordering::Relaxed),
            misses: self.metrics.misses.load(Ordering::Relaxed),
            lookups: self.metrics.lookups.load(Ordering::Relaxed),
            lookup_failures: self.metrics.lookup_failures.load(Ordering::Relaxed),
            refresh_cycles: self.metrics.refresh_cycles.load(Ordering::Relaxed),
        }
    }
}
