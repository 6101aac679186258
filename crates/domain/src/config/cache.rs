use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Resolver cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Seconds between two full refresh cycles. `0` disables the
    /// background refresh job entirely.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Pause between two hostnames inside one refresh cycle, in milliseconds.
    #[serde(default = "default_refresh_delay_ms")]
    pub refresh_delay_ms: u64,

    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

impl CacheConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    pub fn refresh_delay(&self) -> Duration {
        Duration::from_millis(self.refresh_delay_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval_secs(),
            refresh_delay_ms: default_refresh_delay_ms(),
            initial_capacity: default_initial_capacity(),
        }
    }
}

fn default_refresh_interval_secs() -> u64 {
    300
}

fn default_refresh_delay_ms() -> u64 {
    2000
}

fn default_initial_capacity() -> usize {
    64
}
