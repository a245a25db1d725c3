use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{debug, info, instrument, warn};

use crate::constants::{
    EVALUATION_K, RECOMMENDER_STATUS_DEGRADED, RECOMMENDER_STATUS_HEADER, RECOMMENDER_STATUS_OK,
};
use crate::embedding::Embedder;
use crate::evaluation::Evaluator;
use crate::gateway::error::GatewayError;
use crate::gateway::payload::{
    EvaluateRequest, EvaluateResponse, RecommendParams, RecommendResponse,
};
use crate::gateway::state::HandlerState;

#[instrument(skip(state, params), fields(top_k = tracing::field::Empty))]
pub async fn recommend_handler<E>(
    State(state): State<HandlerState<E>>,
    params: Result<Query<RecommendParams>, QueryRejection>,
) -> Result<Response, GatewayError>
where
    E: Embedder + 'static,
{
    let Query(params) = params.map_err(|rejection| {
        GatewayError::InvalidRequest(format!("Invalid query string: {}", rejection.body_text()))
    })?;
    let top_k = parse_top_k(params.top_k.as_deref(), state.default_top_k)?;
    tracing::Span::current().record("top_k", top_k);

    let mut warnings = Vec::new();
    let query = resolve_query_text(&state, &params, &mut warnings).await;

    let catalog = state.catalog.snapshot();
    if catalog.is_empty() {
        warnings.push("assessment catalog is empty".to_string());
    }

    let recommendations = state.engine.recommend(&query, &catalog, top_k)?;
    info!(
        returned = recommendations.len(),
        catalog_version = %catalog.short_version(),
        degraded = !warnings.is_empty(),
        "Recommendations served"
    );

    let status = if warnings.is_empty() {
        RECOMMENDER_STATUS_OK
    } else {
        RECOMMENDER_STATUS_DEGRADED
    };

    Ok(json_response(
        StatusCode::OK,
        status,
        RecommendResponse {
            recommendations,
            warnings,
        },
    ))
}

#[instrument(skip(state, request))]
pub async fn evaluate_handler<E>(
    State(state): State<HandlerState<E>>,
    request: Result<Json<EvaluateRequest>, JsonRejection>,
) -> Result<Response, GatewayError>
where
    E: Embedder + 'static,
{
    let Json(request) = request.map_err(|rejection| {
        GatewayError::InvalidRequest(format!("Invalid request body: {}", rejection.body_text()))
    })?;

    let catalog = state.catalog.snapshot();
    let report = Evaluator::new(&state.engine, &catalog).evaluate(
        request.queries.as_slice(),
        request.ground_truth.as_slice(),
        EVALUATION_K,
    )?;

    Ok(json_response(
        StatusCode::OK,
        RECOMMENDER_STATUS_OK,
        EvaluateResponse::from(report),
    ))
}

#[instrument(skip(state))]
pub async fn reload_handler<E>(State(state): State<HandlerState<E>>) -> Result<Response, GatewayError>
where
    E: Embedder + 'static,
{
    let store = state.store.as_ref().ok_or_else(|| {
        GatewayError::CatalogUnavailable("no catalog store configured".to_string())
    })?;

    let outcome = state
        .catalog
        .reload(store, state.engine.embedder().as_ref())
        .await
        .map_err(|e| GatewayError::CatalogUnavailable(e.to_string()))?;

    Ok(json_response(StatusCode::OK, RECOMMENDER_STATUS_OK, outcome))
}

/// Uses the job description text when `url` is set, else `query`.
///
/// A failed fetch is never embedded: the explicit query (or an empty string) stands in and
/// a warning is recorded.
async fn resolve_query_text<E>(
    state: &HandlerState<E>,
    params: &RecommendParams,
    warnings: &mut Vec<String>,
) -> String
where
    E: Embedder + 'static,
{
    let query = params.query.as_deref().map(str::trim).unwrap_or_default();

    let Some(url) = params.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) else {
        return query.to_string();
    };

    match state.job_source.fetch_text(url).await {
        Ok(text) => {
            debug!(url, chars = text.len(), "Using job description as query");
            text
        }
        Err(e) => {
            warn!(url, error = %e, "Job description fetch failed; falling back");
            warnings.push(format!("job description unavailable: {}", e));
            query.to_string()
        }
    }
}

/// Absent or blank → `default`. Anything that is not a positive integer is rejected.
pub(crate) fn parse_top_k(raw: Option<&str>, default: usize) -> Result<usize, GatewayError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(default);
    };

    match raw.parse::<i64>() {
        Ok(value) if value > 0 => Ok(usize::try_from(value).unwrap_or(usize::MAX)),
        _ => Err(GatewayError::InvalidTopK(format!(
            "expected a positive integer, got {:?}",
            raw
        ))),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, tag: &'static str, body: T) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(RECOMMENDER_STATUS_HEADER, HeaderValue::from_static(tag));
    (status, headers, Json(body)).into_response()
}
