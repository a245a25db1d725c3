//! Cross-cutting, shared constants.
//!
//! # Dimension Invariants
//!
//! Every vector in a [`CatalogIndex`](crate::catalog::CatalogIndex) and every query vector
//! compared against it must come from the same embedder. [`check_embedding_dim`] guards the
//! points where a model is loaded.

/// Output dimension of the default sentence model (`all-MiniLM-L6-v2`).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Token budget for a single encode call.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Result count used by `/recommend` when the caller does not pass `top_k`.
pub const DEFAULT_TOP_K: usize = 10;

/// Cutoff used by the `/evaluate` endpoint (Recall@3, MAP@3).
pub const EVALUATION_K: usize = 3;

/// Timeout for outbound HTTP calls (catalog listing, job description pages).
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Product catalog listing scraped on a cache miss.
pub const DEFAULT_CATALOG_URL: &str = "https://www.shl.com/solutions/products/product-catalog/";

/// Response header carrying a short machine-readable status.
pub const RECOMMENDER_STATUS_HEADER: &str = "X-Recommender-Status";
pub const RECOMMENDER_STATUS_HEALTHY: &str = "healthy";
pub const RECOMMENDER_STATUS_READY: &str = "ready";
pub const RECOMMENDER_STATUS_OK: &str = "ok";
pub const RECOMMENDER_STATUS_DEGRADED: &str = "degraded";

/// A vector whose length disagrees with the index it is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    #[error("embedding dimension must be non-zero")]
    Zero,
    #[error("expected {expected}-dimensional embeddings, got {actual}")]
    Mismatch { expected: usize, actual: usize },
}

/// Checks a model or vector dimension against the one the catalog was built with.
///
/// ```
/// use recommender::constants::{check_embedding_dim, DEFAULT_EMBEDDING_DIM};
///
/// assert!(check_embedding_dim(384, DEFAULT_EMBEDDING_DIM).is_ok());
/// assert!(check_embedding_dim(768, DEFAULT_EMBEDDING_DIM).is_err());
/// ```
pub fn check_embedding_dim(actual: usize, expected: usize) -> Result<(), DimensionError> {
    match (expected, actual) {
        (0, _) => Err(DimensionError::Zero),
        (e, a) if e != a => Err(DimensionError::Mismatch {
            expected: e,
            actual: a,
        }),
        _ => Ok(()),
    }
}
