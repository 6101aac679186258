#![allow(dead_code)]

use async_trait::async_trait;
use dnscache_application::ports::{CacheObserver, NameResolver};
use dnscache_domain::DomainError;
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;

pub fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

// ============================================================================
// Mock NameResolver
// ============================================================================

pub struct MockNameResolver {
    responses: Arc<RwLock<HashMap<String, Result<Vec<IpAddr>, DomainError>>>>,
    fallback: Arc<RwLock<Option<Vec<IpAddr>>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    calls: Arc<RwLock<HashMap<String, u64>>>,
    call_count: Arc<AtomicU64>,
}

impl MockNameResolver {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            fallback: Arc::new(RwLock::new(None)),
            delays: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(RwLock::new(HashMap::new())),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Resolver that answers every hostname with the same addresses.
    pub fn always(addresses: Vec<IpAddr>) -> Self {
        Self {
            fallback: Arc::new(RwLock::new(Some(addresses))),
            ..Self::new()
        }
    }

    pub async fn set_response(&self, hostname: &str, addresses: Vec<IpAddr>) {
        self.responses
            .write()
            .await
            .insert(hostname.to_string(), Ok(addresses));
    }

    pub async fn set_failure(&self, hostname: &str, error: DomainError) {
        self.responses
            .write()
            .await
            .insert(hostname.to_string(), Err(error));
    }

    /// Make every lookup of `hostname` take at least `delay`.
    pub async fn set_delay(&self, hostname: &str, delay: Duration) {
        self.delays
            .write()
            .await
            .insert(hostname.to_string(), delay);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub async fn calls_for(&self, hostname: &str) -> u64 {
        self.calls.read().await.get(hostname).copied().unwrap_or(0)
    }
}

#[async_trait]
impl NameResolver for MockNameResolver {
    async fn lookup_ip(&self, hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self
            .calls
            .write()
            .await
            .entry(hostname.to_string())
            .or_insert(0) += 1;

        let delay = self.delays.read().await.get(hostname).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(response) = self.responses.read().await.get(hostname) {
            return response.clone();
        }

        match self.fallback.read().await.as_ref() {
            Some(addresses) => Ok(addresses.clone()),
            None => Err(DomainError::ResolutionFailed(format!(
                "no such host: {}",
                hostname
            ))),
        }
    }
}

// ============================================================================
// Recording CacheObserver
// ============================================================================

#[derive(Default)]
pub struct RecordingObserver {
    pub hits: Mutex<Vec<String>>,
    pub lookups: Mutex<Vec<String>>,
    pub failures: Mutex<Vec<String>>,
}

impl CacheObserver for RecordingObserver {
    fn on_cache_hit(&self, hostname: &str, _addresses: &[IpAddr]) {
        self.hits.lock().unwrap().push(hostname.to_string());
    }

    fn on_lookup(&self, hostname: &str, _addresses: &[IpAddr]) {
        self.lookups.lock().unwrap().push(hostname.to_string());
    }

    fn on_lookup_failed(&self, hostname: &str, _error: &DomainError) {
        self.failures.lock().unwrap().push(hostname.to_string());
    }
}
