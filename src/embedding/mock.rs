//! Table-driven embedder for deterministic tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{Embedder, EmbeddingError};

/// Returns a fixed vector per exact input text; unknown text maps to the zero vector.
#[derive(Debug, Default)]
pub struct MockEmbedder {
    dim: usize,
    vectors: HashMap<String, Vec<f32>>,
    fail_on: Option<String>,
    calls: AtomicUsize,
}

impl MockEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            ..Default::default()
        }
    }

    /// Registers the vector returned for `text`.
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        assert_eq!(vector.len(), self.dim, "mock vector has wrong dimension");
        self.vectors.insert(text.into(), vector);
        self
    }

    /// Makes `encode(text)` return [`EmbeddingError::InferenceFailed`].
    pub fn failing_on(mut self, text: impl Into<String>) -> Self {
        self.fail_on = Some(text.into());
        self
    }

    /// Number of `encode` calls served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Embedder for MockEmbedder {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        if self.fail_on.as_deref() == Some(text) {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("mock failure for {:?}", text),
            });
        }

        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![0.0; self.dim]))
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }

    fn model_id(&self) -> &str {
        "mock"
    }
}
