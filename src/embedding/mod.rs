//! Embedding provider.
//!
//! - [`Embedder`] is the seam the ranking engine and catalog index depend on.
//! - [`sentence`] provides the production embedder (BERT-family sentence model, or a
//!   deterministic lexical stub when no model files are configured).
//!
//! Vectors produced by different models are not comparable. The catalog and every query
//! in a session must be embedded by the same [`Embedder`]; this is not checked at runtime.

/// BERT encoder with mean pooling.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Hashed bag-of-words vectors used by the stub backend.
pub mod lexical;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
/// Sentence embedder (model or stub backend).
pub mod sentence;
/// Tokenizer loading.
pub mod tokenizer;

pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
pub use sentence::{
    SENTENCE_EMBEDDING_DIM, SENTENCE_MAX_SEQ_LEN, STUB_MODEL_ID, SentenceConfig, SentenceEmbedder,
};

/// Maps text to a fixed-length vector.
///
/// Implementations must be deterministic for a fixed model and must accept the empty
/// string (returning a valid vector, typically all zeros).
pub trait Embedder: Send + Sync {
    /// Embeds a single string.
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embeds a batch, preserving input order.
    fn encode_many(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.encode(text)).collect()
    }

    /// Output vector length.
    fn embedding_dim(&self) -> usize;

    /// Identifier of the model behind this embedder.
    fn model_id(&self) -> &str;
}

impl<E: Embedder + ?Sized> Embedder for std::sync::Arc<E> {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).encode(text)
    }

    fn encode_many(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).encode_many(texts)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }

    fn model_id(&self) -> &str {
        (**self).model_id()
    }
}

/// L2-normalises in place. Zero vectors are left untouched.
pub fn normalize(embedding: &mut [f32]) {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 {
        for x in embedding.iter_mut() {
            *x /= norm;
        }
    }
}
