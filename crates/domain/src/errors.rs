use thiserror::Error;

/// Failure reported by a name-resolution backend.
///
/// The cache never wraps or reclassifies these: whatever the backend
/// returns is what the caller of a lookup sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Resolution failed: {0}")]
    ResolutionFailed(String),

    #[error("Query timeout")]
    QueryTimeout,
}
