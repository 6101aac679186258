pub mod resolver_cache;

pub use resolver_cache::ResolverCache;
