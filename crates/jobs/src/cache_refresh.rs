use dnscache_application::services::ResolverCache;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Periodically re-resolves every hostname held by a [`ResolverCache`].
///
/// Each cycle sleeps for the interval first, then runs a full
/// `refresh_all`. A zero interval disables the job.
pub struct CacheRefreshJob {
    cache: Arc<ResolverCache>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl CacheRefreshJob {
    pub fn new(cache: Arc<ResolverCache>, interval: Duration) -> Self {
        Self {
            cache,
            interval,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn is_enabled(&self) -> bool {
        !self.interval.is_zero()
    }

    /// Spawn the refresh loop. Returns `None` when the interval is zero.
    ///
    /// Cancelling the token stops the loop at its next await point, even in
    /// the middle of a refresh cycle.
    pub fn start(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.is_enabled() {
            info!("Cache refresh disabled (interval is zero)");
            return None;
        }

        info!(
            interval_ms = self.interval.as_millis() as u64,
            "Starting cache refresh job"
        );

        Some(tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheRefreshJob: shutting down");
                        break;
                    }
                    _ = self.cycle() => {}
                }
            }
        }))
    }

    async fn cycle(&self) {
        sleep(self.interval).await;
        self.cache.refresh_all().await;
    }
}
