// crates/flagdb-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading, saving or building a flag catalog.
///
/// Query operations never fail: malformed colors and unknown criteria just
/// match nothing, and lookups signal absence with `Option`.
#[derive(Debug, Error)]
pub enum FlagError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary format error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[cfg(feature = "builder")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, FlagError>;
