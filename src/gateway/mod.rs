//! HTTP gateway (Axum) for recommendations, evaluation, and catalog reloads.
//!
//! This module is primarily used by the `recommender` binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use handler::{evaluate_handler, recommend_handler, reload_handler};
pub use state::HandlerState;

use crate::constants::{
    RECOMMENDER_STATUS_DEGRADED, RECOMMENDER_STATUS_HEADER, RECOMMENDER_STATUS_HEALTHY,
    RECOMMENDER_STATUS_READY,
};
use crate::embedding::{Embedder, STUB_MODEL_ID};

pub fn create_router_with_state<E>(state: HandlerState<E>) -> Router
where
    E: Embedder + 'static,
{
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler::<E>))
        .route("/recommend", get(recommend_handler::<E>))
        .route("/api/recommend", get(recommend_handler::<E>))
        .route("/evaluate", post(evaluate_handler::<E>))
        .route("/api/evaluate", post(evaluate_handler::<E>))
        .route("/catalog/reload", post(reload_handler::<E>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub catalog: &'static str,
    pub catalog_records: usize,
    pub catalog_version: String,
    pub embedder_mode: &'static str,
    pub model_id: String,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        RECOMMENDER_STATUS_HEADER,
        HeaderValue::from_static(RECOMMENDER_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<E>(State(state): State<HandlerState<E>>) -> Response
where
    E: Embedder + 'static,
{
    let catalog = state.catalog.snapshot();
    let catalog_status = if catalog.is_empty() {
        "empty"
    } else {
        RECOMMENDER_STATUS_READY
    };

    let model_id = state.engine.embedder().model_id().to_string();
    let embedder_mode = if model_id == STUB_MODEL_ID {
        "stub"
    } else {
        "model"
    };

    let components = ComponentStatus {
        http: RECOMMENDER_STATUS_READY,
        catalog: catalog_status,
        catalog_records: catalog.len(),
        catalog_version: catalog.short_version().to_string(),
        embedder_mode,
        model_id,
    };

    let is_ready = components.catalog == RECOMMENDER_STATUS_READY;
    let (status_code, status_msg) = if is_ready {
        (StatusCode::OK, RECOMMENDER_STATUS_READY)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, RECOMMENDER_STATUS_DEGRADED)
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        RECOMMENDER_STATUS_HEADER,
        HeaderValue::from_static(status_msg),
    );

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status: status_msg,
            components,
        }),
    )
        .into_response()
}
