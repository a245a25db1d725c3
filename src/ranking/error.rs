use thiserror::Error;

use crate::constants::DimensionError;
use crate::embedding::EmbeddingError;

/// Errors returned by [`RankingEngine`](super::RankingEngine).
#[derive(Debug, Error)]
pub enum RankingError {
    #[error("top_k must be at least 1, got {top_k}")]
    InvalidTopK { top_k: usize },

    #[error("query embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    /// The query was embedded by a different model than the catalog snapshot.
    #[error("query vector does not fit the catalog: {0}")]
    Dimension(#[from] DimensionError),
}

pub type RankingResult<T> = Result<T, RankingError>;
