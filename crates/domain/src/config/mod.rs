//! Configuration module for dnscache
//!
//! - `root`: Main configuration and CLI overrides
//! - `cache`: Resolver cache and refresh settings
//! - `resolver`: Name-resolution backend settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
