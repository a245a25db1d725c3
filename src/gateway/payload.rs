//! Request and response bodies.

use serde::{Deserialize, Serialize};

use crate::evaluation::EvaluationReport;
use crate::ranking::Recommendation;

/// Query string of `GET /recommend`. Every field is optional; `top_k` is validated by hand
/// so a bad value maps to `invalid_top_k` rather than a generic extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendParams {
    pub query: Option<String>,
    pub url: Option<String>,
    pub top_k: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Recommendation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Body of `POST /evaluate`. Missing fields default to empty.
#[derive(Debug, Default, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub queries: Vec<String>,
    #[serde(default)]
    pub ground_truth: Vec<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct IndividualScore {
    pub query: String,
    pub recall: f64,
    pub ap: f64,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub mean_recall_at_3: f64,
    pub map_at_3: f64,
    pub individual_scores: Vec<IndividualScore>,
}

impl From<EvaluationReport> for EvaluateResponse {
    fn from(report: EvaluationReport) -> Self {
        Self {
            mean_recall_at_3: report.mean_recall,
            map_at_3: report.mean_average_precision,
            individual_scores: report
                .per_query
                .into_iter()
                .map(|q| IndividualScore {
                    query: q.query,
                    recall: q.recall,
                    ap: q.ap,
                })
                .collect(),
        }
    }
}
