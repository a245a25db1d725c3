use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use tracing::{debug, instrument};

use super::error::{RankingError, RankingResult};
use super::similarity::cosine_similarity;
use crate::catalog::{AssessmentRecord, CatalogIndex, TestType};
use crate::constants::check_embedding_dim;
use crate::constraints::{QueryConstraints, extract};
use crate::embedding::Embedder;

/// A ranked catalog entry as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub url: String,
    #[serde(serialize_with = "yes_no")]
    pub remote_testing: bool,
    #[serde(serialize_with = "yes_no")]
    pub adaptive_irt: bool,
    /// `"<n> minutes"` or `"Unknown"`.
    pub duration: String,
    pub test_type: TestType,
    pub similarity_score: f32,
}

impl Recommendation {
    fn from_record(record: &AssessmentRecord, similarity_score: f32) -> Self {
        Self {
            name: record.name.clone(),
            url: record.url.clone(),
            remote_testing: record.remote_testing,
            adaptive_irt: record.adaptive_irt,
            duration: record.duration_label(),
            test_type: record.test_type,
            similarity_score,
        }
    }
}

fn yes_no<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "Yes" } else { "No" })
}

/// Scores a catalog snapshot against a query and applies hard filters.
///
/// The engine is stateless apart from the embedder; the catalog is passed per call so
/// each request ranks against the snapshot it took.
#[derive(Debug)]
pub struct RankingEngine<E: Embedder> {
    embedder: Arc<E>,
}

impl<E: Embedder> Clone for RankingEngine<E> {
    fn clone(&self) -> Self {
        Self {
            embedder: Arc::clone(&self.embedder),
        }
    }
}

impl<E: Embedder> RankingEngine<E> {
    pub fn new(embedder: Arc<E>) -> Self {
        Self { embedder }
    }

    pub fn embedder(&self) -> &Arc<E> {
        &self.embedder
    }

    /// Ranks `catalog` for `query` under explicit `constraints`.
    ///
    /// Filters are applied after scoring, so they never change relative order. Ties keep
    /// catalog order.
    #[instrument(skip(self, query, catalog), fields(records = catalog.len()))]
    pub fn rank(
        &self,
        query: &str,
        catalog: &CatalogIndex,
        constraints: &QueryConstraints,
        top_k: usize,
    ) -> RankingResult<Vec<Recommendation>> {
        if top_k == 0 {
            return Err(RankingError::InvalidTopK { top_k });
        }

        if catalog.is_empty() {
            return Ok(Vec::new());
        }

        let query_embedding = self.embedder.encode(query)?;
        check_embedding_dim(query_embedding.len(), catalog.dimension())?;

        let mut scored: Vec<(&AssessmentRecord, f32)> = catalog
            .iter()
            .map(|(record, embedding)| (record, cosine_similarity(&query_embedding, embedding)))
            .filter(|(record, _)| constraints.allows(record))
            .collect();

        let survivors = scored.len();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        scored.truncate(top_k);

        debug!(
            survivors,
            returned = scored.len(),
            top_score = scored.first().map(|(_, s)| *s),
            "Ranked catalog"
        );

        Ok(scored
            .into_iter()
            .map(|(record, score)| Recommendation::from_record(record, score))
            .collect())
    }

    /// Extracts constraints from `query`, then ranks.
    pub fn recommend(
        &self,
        query: &str,
        catalog: &CatalogIndex,
        top_k: usize,
    ) -> RankingResult<Vec<Recommendation>> {
        let constraints = extract(query);
        self.rank(query, catalog, &constraints, top_k)
    }
}
