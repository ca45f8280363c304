//! Error types for record lookups.

/// Errors from a provider fetch or the cache itself.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("provider request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider error: {0}")]
    Provider(String),
    #[error("cache error: {0}")]
    Cache(String),
}
