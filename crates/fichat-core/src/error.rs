// crates/fichat-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading the reference table or answering a query.
///
/// A city or province that does not match is *not* an error; it is reported
/// as [`crate::Answer::NotFound`]. Everything here is an internal failure the
/// request boundary should surface as a generic failure reply.
#[derive(Debug, Error)]
pub enum FiError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, FiError>;
