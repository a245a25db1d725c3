//! Assessment recommender library crate (used by the server binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`AssessmentRecord`], [`TestType`] - Catalog entries
//! - [`CatalogStore`], [`CatalogIndex`], [`CatalogHandle`] - Loading, embedding, publishing
//! - [`QueryConstraints`], [`extract`] - Hard filters mined from a query
//! - [`RankingEngine`], [`Recommendation`] - Similarity ranking
//! - [`Evaluator`], [`EvaluationReport`] - Recall@k / MAP@k harness
//!
//! ## Embedding
//! - [`Embedder`] - Text to vector seam
//! - [`SentenceEmbedder`], [`SentenceConfig`] - BERT-family sentence model or lexical stub
//!
//! ## Serving
//! - [`Config`], [`ConfigError`] - Environment configuration
//! - [`gateway`] - Axum router and handlers
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod constraints;
pub mod embedding;
pub mod evaluation;
pub mod gateway;
pub mod jobdesc;
pub mod ranking;

#[cfg(any(test, feature = "mock"))]
pub use catalog::MockCatalogSource;
pub use catalog::{
    AssessmentRecord, CatalogError, CatalogHandle, CatalogIndex, CatalogOrigin, CatalogResult,
    CatalogSource, CatalogStore, HttpCatalogSource, ReloadOutcome, TestType, seed_catalog,
};

pub use config::{Config, ConfigError};
pub use constants::{DimensionError, check_embedding_dim};
pub use constraints::{QueryConstraints, extract};

#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{
    Embedder, EmbeddingError, SENTENCE_EMBEDDING_DIM, SENTENCE_MAX_SEQ_LEN, SentenceConfig,
    SentenceEmbedder,
};

pub use evaluation::{
    Benchmark, EvaluationError, EvaluationReport, Evaluator, QueryEvaluation, default_benchmark,
};

#[cfg(any(test, feature = "mock"))]
pub use jobdesc::MockJobDescriptionSource;
pub use jobdesc::{HttpJobDescriptionSource, JobDescriptionError, JobDescriptionSource};

pub use ranking::{RankingEngine, RankingError, Recommendation, cosine_similarity};
