use std::path::PathBuf;

use crate::embedding::error::EmbeddingError;

/// Default sentence embedding dimension.
pub const SENTENCE_EMBEDDING_DIM: usize = crate::constants::DEFAULT_EMBEDDING_DIM;

/// Default sentence max sequence length.
pub const SENTENCE_MAX_SEQ_LEN: usize = crate::constants::DEFAULT_MAX_SEQ_LEN;

/// Model identifier reported by the stub backend.
pub const STUB_MODEL_ID: &str = "lexical-stub";

/// The part of a BERT `config.json` needed before the weights are loaded.
#[derive(serde::Deserialize)]
struct ModelHeader {
    hidden_size: usize,
}

#[derive(Debug, Clone)]
/// Configuration for [`SentenceEmbedder`](super::SentenceEmbedder).
pub struct SentenceConfig {
    /// Directory holding `config.json`, `tokenizer.json` and `model.safetensors`.
    pub model_dir: PathBuf,
    /// Max tokens to consider.
    pub max_seq_len: usize,
    /// Output embedding dimension.
    pub embedding_dim: usize,
    /// If true, run the deterministic lexical stub (no model files required).
    pub testing_stub: bool,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            max_seq_len: SENTENCE_MAX_SEQ_LEN,
            embedding_dim: SENTENCE_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl SentenceConfig {
    const REQUIRED_FILES: [&'static str; 3] = ["config.json", "tokenizer.json", "model.safetensors"];

    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a config for a model directory, taking `embedding_dim` from the
    /// `hidden_size` in its `config.json`.
    ///
    /// A 768-dimensional checkpoint works the same as the 384-dimensional default.
    pub fn from_model_dir<P: Into<PathBuf>>(model_dir: P) -> Result<Self, EmbeddingError> {
        let config = Self::new(model_dir);
        let path = config.model_dir.join("config.json");

        let raw = std::fs::read_to_string(&path)
            .map_err(|_| EmbeddingError::ModelNotFound { path: path.clone() })?;
        let header: ModelHeader =
            serde_json::from_str(&raw).map_err(|e| EmbeddingError::InvalidConfig {
                reason: format!("{}: {}", path.display(), e),
            })?;

        Ok(config.with_embedding_dim(header.hidden_size))
    }

    /// Creates a stub config (no model files; produces deterministic lexical embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    pub fn with_embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    /// Validates required fields for the selected mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be greater than zero".to_string(),
            });
        }

        if self.testing_stub {
            return Ok(());
        }

        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than zero".to_string(),
            });
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.model_dir.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: self.model_dir.clone(),
            });
        }

        if let Some(missing) = self.missing_files().into_iter().next() {
            return Err(EmbeddingError::ModelNotFound { path: missing });
        }

        Ok(())
    }

    /// Returns required model files that are absent from `model_dir`.
    pub fn missing_files(&self) -> Vec<PathBuf> {
        Self::REQUIRED_FILES
            .iter()
            .map(|name| self.model_dir.join(name))
            .filter(|path| !path.exists())
            .collect()
    }

    /// Human readable model identifier (directory name, or the stub id).
    pub fn model_id(&self) -> String {
        if self.testing_stub {
            return STUB_MODEL_ID.to_string();
        }
        self.model_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.model_dir.display().to_string())
    }
}
