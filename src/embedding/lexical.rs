//! Feature-hashed bag-of-words vectors.
//!
//! Each lowercased alphanumeric token is hashed with BLAKE3; the first eight bytes pick a
//! bucket and the ninth byte picks a sign. Texts sharing vocabulary get positive cosine
//! similarity, so the stub backend still ranks sensibly without model files.

use super::normalize;

/// Splits on anything that is not alphanumeric and lowercases.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_lowercase())
}

/// Builds an L2-normalised hashed term-frequency vector.
///
/// Text without tokens (including the empty string) yields the zero vector.
pub fn hashed_bag_of_words(text: &str, dim: usize) -> Vec<f32> {
    let mut embedding = vec![0.0f32; dim];
    if dim == 0 {
        return embedding;
    }

    for token in tokenize(text) {
        let hash = blake3::hash(token.as_bytes());
        let bytes = hash.as_bytes();
        let mut bucket_bytes = [0u8; 8];
        bucket_bytes.copy_from_slice(&bytes[..8]);
        let bucket = (u64::from_le_bytes(bucket_bytes) % dim as u64) as usize;
        let sign = if bytes[8] & 1 == 0 { 1.0 } else { -1.0 };
        embedding[bucket] += sign;
    }

    normalize(&mut embedding);
    embedding
}
