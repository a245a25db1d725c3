use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while loading the sentence model or embedding text.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding model file not found: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load sentence model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("embedding failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("invalid embedder configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("embedder returned {actual} dimensions, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl From<candle_core::Error> for EmbeddingError {
    fn from(err: candle_core::Error) -> Self {
        EmbeddingError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}
