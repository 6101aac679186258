pub mod cache_observer;
pub mod name_resolver;

pub use cache_observer::CacheObserver;
pub use name_resolver::NameResolver;
