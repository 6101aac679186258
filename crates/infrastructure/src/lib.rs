pub mod events;
pub mod system;

pub use events::TracingCacheObserver;
pub use system::SystemNameResolver;
