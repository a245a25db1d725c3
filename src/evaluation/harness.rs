use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, instrument};

use super::error::{EvaluationError, EvaluationResult};
use super::metrics::{average_precision_at_k, mean, recall_at_k};
use crate::catalog::CatalogIndex;
use crate::embedding::Embedder;
use crate::ranking::{RankingEngine, RankingError};

/// Scores for a single labelled query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryEvaluation {
    pub query: String,
    pub recall: f64,
    pub ap: f64,
    /// Names returned at the cutoff, in rank order.
    #[serde(skip)]
    pub retrieved: Vec<String>,
}

/// Per-query scores plus their means.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub k: usize,
    pub per_query: Vec<QueryEvaluation>,
    pub mean_recall: f64,
    pub mean_average_precision: f64,
}

/// Runs labelled queries through the ranking engine against one catalog snapshot.
pub struct Evaluator<'a, E: Embedder> {
    engine: &'a RankingEngine<E>,
    catalog: &'a CatalogIndex,
}

impl<'a, E: Embedder> Evaluator<'a, E> {
    pub fn new(engine: &'a RankingEngine<E>, catalog: &'a CatalogIndex) -> Self {
        Self { engine, catalog }
    }

    /// Evaluates `queries[i]` against `ground_truth[i]` at cutoff `k`.
    ///
    /// Each query goes through [`RankingEngine::recommend`], so extracted constraints
    /// apply exactly as they do for live requests.
    #[instrument(skip_all, fields(queries = queries.len(), k = k))]
    pub fn evaluate<Q, T>(
        &self,
        queries: &[Q],
        ground_truth: &[T],
        k: usize,
    ) -> EvaluationResult<EvaluationReport>
    where
        Q: AsRef<str>,
        T: AsRef<[String]>,
    {
        if queries.len() != ground_truth.len() {
            return Err(EvaluationError::LengthMismatch {
                queries: queries.len(),
                ground_truth: ground_truth.len(),
            });
        }
        if k == 0 {
            return Err(RankingError::InvalidTopK { top_k: k }.into());
        }

        let mut per_query = Vec::with_capacity(queries.len());
        for (query, truth) in queries.iter().zip(ground_truth) {
            let query = query.as_ref();
            let truth: HashSet<&str> = truth.as_ref().iter().map(String::as_str).collect();

            let recommendations = self.engine.recommend(query, self.catalog, k)?;
            let ranked: Vec<&str> = recommendations.iter().map(|r| r.name.as_str()).collect();

            let recall = recall_at_k(&ranked, &truth, k);
            let ap = average_precision_at_k(&ranked, &truth, k);
            debug!(recall, ap, retrieved = ranked.len(), "Evaluated query");

            per_query.push(QueryEvaluation {
                query: query.to_string(),
                recall,
                ap,
                retrieved: ranked.iter().map(|s| s.to_string()).collect(),
            });
        }

        let recalls: Vec<f64> = per_query.iter().map(|q| q.recall).collect();
        let aps: Vec<f64> = per_query.iter().map(|q| q.ap).collect();
        let report = EvaluationReport {
            k,
            mean_recall: mean(&recalls),
            mean_average_precision: mean(&aps),
            per_query,
        };

        info!(
            queries = report.per_query.len(),
            mean_recall = report.mean_recall,
            map = report.mean_average_precision,
            "Evaluation complete"
        );

        Ok(report)
    }
}
