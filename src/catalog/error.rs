use std::path::PathBuf;

use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// No cache, no live listing, no seed. Fatal at startup.
    #[error("catalog unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("failed to read catalog cache {path}: {source}")]
    CacheRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog cache {path}: {source}")]
    CacheParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write catalog cache {path}: {reason}")]
    CacheWrite { path: PathBuf, reason: String },

    #[error("catalog fetch from {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("catalog listing at {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("catalog listing at {url} contained no assessments")]
    EmptyListing { url: String },

    #[error("catalog embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("catalog has {records} records but {embeddings} embeddings")]
    MismatchedLengths { records: usize, embeddings: usize },

    #[error("embedding {index} has dimension {actual}, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
