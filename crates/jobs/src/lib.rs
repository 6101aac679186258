pub mod cache_refresh;
pub mod runner;

pub use cache_refresh::CacheRefreshJob;
pub use runner::JobRunner;
