#![allow(dead_code)]

use async_trait::async_trait;
use dnscache_application::ports::NameResolver;
use dnscache_domain::DomainError;
use std::net::IpAddr;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

// ============================================================================
// Counting NameResolver
// ============================================================================

pub struct CountingResolver {
    addresses: Vec<IpAddr>,
    call_count: Arc<AtomicU64>,
    should_fail: Arc<AtomicBool>,
}

impl CountingResolver {
    pub fn new(addresses: Vec<IpAddr>) -> Self {
        Self {
            addresses,
            call_count: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl NameResolver for CountingResolver {
    async fn lookup_ip(&self, _hostname: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::ResolutionFailed("upstream down".to_string()));
        }
        Ok(self.addresses.clone())
    }
}
