//! Sentence embedder (BERT-family model + tokenizer).
//!
//! Use [`SentenceConfig::stub`] for tests/examples without model files.

/// Sentence embedder configuration.
pub mod config;

#[cfg(test)]
mod tests;

pub use config::{SENTENCE_EMBEDDING_DIM, SENTENCE_MAX_SEQ_LEN, STUB_MODEL_ID, SentenceConfig};

use candle_core::{Device, Tensor};
use tracing::{debug, info, warn};

use crate::constants::check_embedding_dim;
use crate::embedding::bert::BertSentenceEncoder;
use crate::embedding::device::select_device;
use crate::embedding::error::EmbeddingError;
use crate::embedding::lexical::hashed_bag_of_words;
use crate::embedding::tokenizer::load_sentence_tokenizer;
use crate::embedding::{Embedder, normalize};

enum EmbedderBackend {
    Model {
        encoder: BertSentenceEncoder,
        tokenizer: tokenizers::Tokenizer,
        device: Device,
    },
    Stub,
}

/// Embedding generator for catalog entries and queries (supports stub mode).
pub struct SentenceEmbedder {
    backend: EmbedderBackend,
    config: SentenceConfig,
    model_id: String,
}

impl std::fmt::Debug for SentenceEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentenceEmbedder")
            .field(
                "backend",
                &match &self.backend {
                    EmbedderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EmbedderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("model_id", &self.model_id)
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SentenceEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    pub fn load(config: SentenceConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;
        let model_id = config.model_id();

        if config.testing_stub {
            warn!(
                embedding_dim = config.embedding_dim,
                "Sentence embedder running in STUB mode (lexical hashing)"
            );
            return Ok(Self {
                backend: EmbedderBackend::Stub,
                config,
                model_id,
            });
        }

        let device = select_device();
        debug!(?device, "Selected compute device for sentence embedder");

        let encoder = BertSentenceEncoder::load(&config.model_dir, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            }
        })?;

        check_embedding_dim(encoder.hidden_size(), config.embedding_dim).map_err(|e| {
            EmbeddingError::InvalidConfig {
                reason: format!("model hidden_size does not match embedding_dim: {}", e),
            }
        })?;

        let tokenizer = load_sentence_tokenizer(&config.model_dir, config.max_seq_len)?;

        info!(
            model_dir = %config.model_dir.display(),
            model_id = %model_id,
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            "Sentence model loaded successfully"
        );

        Ok(Self {
            backend: EmbedderBackend::Model {
                encoder,
                tokenizer,
                device,
            },
            config,
            model_id,
        })
    }

    /// Shorthand for `load(SentenceConfig::stub())`.
    pub fn stub() -> Result<Self, EmbeddingError> {
        Self::load(SentenceConfig::stub())
    }

    fn embed_with_model(
        &self,
        text: &str,
        encoder: &BertSentenceEncoder,
        tokenizer: &tokenizers::Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let ids = encoding.get_ids();
        if ids.is_empty() {
            return Ok(vec![0.0; self.config.embedding_dim]);
        }

        debug!(
            text_len = text.len(),
            token_count = ids.len(),
            "Generating embedding (transformer forward pass)"
        );

        let input_ids = Tensor::new(ids, device)?.unsqueeze(0)?;
        let type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        let pooled = encoder
            .forward(&input_ids, &type_ids, &attention_mask)
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Transformer forward pass failed: {}", e),
            })?;

        let mut embedding = pooled.squeeze(0)?.to_vec1::<f32>()?;
        if embedding.len() != self.config.embedding_dim {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.config.embedding_dim,
                actual: embedding.len(),
            });
        }
        normalize(&mut embedding);
        Ok(embedding)
    }

    fn embed_stub(&self, text: &str) -> Vec<f32> {
        debug!(text_len = text.len(), "Generating stub embedding");
        hashed_bag_of_words(text, self.config.embedding_dim)
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Stub)
    }

    /// Returns `true` if a model is loaded.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, EmbedderBackend::Model { .. })
    }

    /// Returns the embedder configuration.
    pub fn config(&self) -> &SentenceConfig {
        &self.config
    }
}

impl Embedder for SentenceEmbedder {
    /// Blank text short-circuits to the zero vector in both backends.
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.trim().is_empty() {
            return Ok(vec![0.0; self.config.embedding_dim]);
        }

        match &self.backend {
            EmbedderBackend::Model {
                encoder,
                tokenizer,
                device,
            } => self.embed_with_model(text, encoder, tokenizer, device),
            EmbedderBackend::Stub => Ok(self.embed_stub(text)),
        }
    }

    fn encode_many(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        debug!(batch = texts.len(), "Embedding batch");
        // Sequential: batched forward passes would need padding-aware pooling.
        texts.iter().map(|text| self.encode(text)).collect()
    }

    fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
