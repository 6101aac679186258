//! dnscache domain layer
pub mod cache_stats;
pub mod config;
pub mod errors;

pub use cache_stats::CacheStats;
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
