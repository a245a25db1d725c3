//! Records paired 1:1 with their embeddings.

use tracing::{debug, info};

use super::error::{CatalogError, CatalogResult};
use super::record::AssessmentRecord;
use crate::embedding::Embedder;

/// Immutable catalog snapshot.
///
/// `records[i]` and `embeddings[i]` always describe the same assessment. Fields are private
/// and the only constructors check the pairing, so a built index can never be mismatched.
/// To change anything, build a new index and publish it through
/// [`CatalogHandle::swap`](super::CatalogHandle::swap).
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    records: Vec<AssessmentRecord>,
    embeddings: Vec<Vec<f32>>,
    dimension: usize,
    model_id: String,
    version: String,
}

impl CatalogIndex {
    /// Embeds every record description with `embedder`.
    pub fn build<E>(records: Vec<AssessmentRecord>, embedder: &E) -> CatalogResult<Self>
    where
        E: Embedder + ?Sized,
    {
        let texts: Vec<&str> = records.iter().map(|r| r.embedding_text()).collect();
        let embeddings = embedder.encode_many(&texts)?;

        let index = Self::from_parts(
            records,
            embeddings,
            embedder.embedding_dim(),
            embedder.model_id(),
        )?;

        info!(
            records = index.len(),
            dimension = index.dimension,
            model_id = %index.model_id,
            version = %index.short_version(),
            "Catalog index built"
        );

        Ok(index)
    }

    /// Assembles an index from precomputed embeddings.
    pub fn from_parts(
        records: Vec<AssessmentRecord>,
        embeddings: Vec<Vec<f32>>,
        dimension: usize,
        model_id: impl Into<String>,
    ) -> CatalogResult<Self> {
        if records.len() != embeddings.len() {
            return Err(CatalogError::MismatchedLengths {
                records: records.len(),
                embeddings: embeddings.len(),
            });
        }

        if let Some((index, embedding)) = embeddings
            .iter()
            .enumerate()
            .find(|(_, e)| e.len() != dimension)
        {
            return Err(CatalogError::DimensionMismatch {
                index,
                expected: dimension,
                actual: embedding.len(),
            });
        }

        let version = fingerprint(&records);
        debug!(records = records.len(), %version, "Catalog index assembled");

        Ok(Self {
            records,
            embeddings,
            dimension,
            model_id: model_id.into(),
            version,
        })
    }

    /// An index with no records.
    pub fn empty(dimension: usize) -> Self {
        Self {
            records: Vec::new(),
            embeddings: Vec::new(),
            dimension,
            model_id: String::new(),
            version: fingerprint(&[]),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[AssessmentRecord] {
        &self.records
    }

    pub fn embeddings(&self) -> &[Vec<f32>] {
        &self.embeddings
    }

    /// Iterates `(record, embedding)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&AssessmentRecord, &[f32])> {
        self.records
            .iter()
            .zip(self.embeddings.iter().map(Vec::as_slice))
    }

    pub fn find(&self, name: &str) -> Option<&AssessmentRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Model that produced the embeddings.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// BLAKE3 fingerprint (hex) of the record list.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn short_version(&self) -> &str {
        &self.version[..12.min(self.version.len())]
    }
}

/// Content fingerprint of a record list; order-sensitive.
pub fn fingerprint(records: &[AssessmentRecord]) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(records.len() as u64).to_le_bytes());

    for record in records {
        for field in [
            record.name.as_str(),
            record.url.as_str(),
            record.description.as_str(),
            record.test_type.as_str(),
        ] {
            hasher.update(&(field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }
        let duration = record.duration_minutes.map_or(-1i64, i64::from);
        hasher.update(&duration.to_le_bytes());
        hasher.update(&[record.remote_testing as u8, record.adaptive_irt as u8]);
    }

    hasher.finalize().to_hex().to_string()
}
