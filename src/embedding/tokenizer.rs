use std::path::Path;

use tokenizers::{Tokenizer, TruncationParams};

use super::error::EmbeddingError;

/// Loads `<model_dir>/tokenizer.json`, truncating every encode to `max_len` tokens.
///
/// Job descriptions fetched by URL often exceed the model's position table.
pub fn load_sentence_tokenizer(model_dir: &Path, max_len: usize) -> Result<Tokenizer, EmbeddingError> {
    let path = model_dir.join("tokenizer.json");
    if !path.is_file() {
        return Err(EmbeddingError::ModelNotFound { path });
    }

    let mut tokenizer =
        Tokenizer::from_file(&path).map_err(|e| EmbeddingError::TokenizationFailed {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

    tokenizer
        .with_truncation(Some(TruncationParams {
            max_length: max_len,
            ..Default::default()
        }))
        .map_err(|e| EmbeddingError::TokenizationFailed {
            reason: format!("failed to configure truncation: {}", e),
        })?;

    // Single-sequence encodes never need padding.
    tokenizer.with_padding(None);

    Ok(tokenizer)
}
