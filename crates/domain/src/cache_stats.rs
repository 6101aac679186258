use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of the resolver cache counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub lookups: u64,
    pub lookup_failures: u64,
    pub refresh_cycles: u64,
}

impl CacheStats {
    /// Fraction of fetches answered from memory, `0.0` before the first fetch.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            return 0.0;
        }
        self.hits as f64 / total as f64
    }
}
