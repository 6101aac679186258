use dnscache_application::services::ResolverCache;
use dnscache_domain::Config;
use dnscache_infrastructure::{SystemNameResolver, TracingCacheObserver};
use dnscache_jobs::CacheRefreshJob;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct CacheServices {
    pub cache: Arc<ResolverCache>,
    pub refresh_job: CacheRefreshJob,
}

impl CacheServices {
    pub fn new(config: &Config, shutdown: CancellationToken) -> Self {
        let resolver = SystemNameResolver::new().with_timeout(config.resolver.lookup_timeout());

        let mut cache = ResolverCache::new(Arc::new(resolver))
            .with_capacity(config.cache.initial_capacity)
            .with_refresh_delay(config.cache.refresh_delay());

        if config.logging.cache_events {
            cache = cache.with_observer(Arc::new(TracingCacheObserver));
        }

        let cache = Arc::new(cache);
        let refresh_job = CacheRefreshJob::new(Arc::clone(&cache), config.cache.refresh_interval())
            .with_cancellation(shutdown);

        Self { cache, refresh_job }
    }
}
