use crate::CacheRefreshJob;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// let handles = JobRunner::new()
///     .with_cache_refresh(CacheRefreshJob::new(cache, interval).with_cancellation(token))
///     .start();
/// ```
pub struct JobRunner {
    cache_refresh: Option<CacheRefreshJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            cache_refresh: None,
        }
    }

    pub fn with_cache_refresh(mut self, job: CacheRefreshJob) -> Self {
        self.cache_refresh = Some(job);
        self
    }

    /// Start all registered background jobs and hand back their task handles.
    pub fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");

        let mut handles = Vec::new();

        if let Some(job) = self.cache_refresh {
            handles.extend(Arc::new(job).start());
        }

        info!(jobs = handles.len(), "All background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
