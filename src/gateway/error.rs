use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::constants::RECOMMENDER_STATUS_HEADER;
use crate::evaluation::EvaluationError;
use crate::ranking::RankingError;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid top_k: {0}")]
    InvalidTopK(String),

    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("embedding failed: {0}")]
    EmbeddingFailed(String),
}

impl From<RankingError> for GatewayError {
    fn from(err: RankingError) -> Self {
        match err {
            RankingError::InvalidTopK { top_k } => GatewayError::InvalidTopK(top_k.to_string()),
            RankingError::Embedding(e) => GatewayError::EmbeddingFailed(e.to_string()),
            RankingError::Dimension(e) => GatewayError::EmbeddingFailed(e.to_string()),
        }
    }
}

impl From<EvaluationError> for GatewayError {
    fn from(err: EvaluationError) -> Self {
        match err {
            EvaluationError::LengthMismatch { .. } => GatewayError::InvalidRequest(err.to_string()),
            EvaluationError::Ranking(e) => e.into(),
        }
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, status_tag) = match &self {
            GatewayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            GatewayError::InvalidTopK(_) => (StatusCode::BAD_REQUEST, "invalid_top_k"),
            GatewayError::CatalogUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "catalog_unavailable")
            }
            GatewayError::EmbeddingFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "embedding_error")
            }
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            RECOMMENDER_STATUS_HEADER,
            HeaderValue::from_static(status_tag),
        );

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: status.as_u16(),
        });

        (status, headers, body).into_response()
    }
}
