use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use barrister_core::{AppError, Backend};
use serde_json::Value;

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod cases;
pub mod financial;
pub mod settings;

/// Build the full router for any storage backend.
pub fn router<B: Backend>(state: Arc<AppState<B>>) -> Router {
    let api = Router::new()
        .route(
            "/cases",
            get(cases::get_cases::<B>)
                .post(cases::create_case::<B>)
                .put(cases::update_case::<B>)
                .delete(cases::delete_case::<B>),
        )
        .route(
            "/financial",
            get(financial::get_transactions::<B>)
                .post(financial::create_transaction::<B>)
                .delete(financial::delete_transaction::<B>),
        )
        .route(
            "/firm-settings",
            get(settings::get_settings::<B>).post(settings::upsert_settings::<B>),
        );

    let public = Router::new()
        .route("/health", get(health::<B>))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    public.merge(api).with_state(state)
}

/// Parse a request body as JSON regardless of its `Content-Type`.
fn json_body(body: Result<Bytes, BytesRejection>) -> Result<Value, ApiError> {
    let bytes = body?;
    Ok(serde_json::from_slice(&bytes).map_err(AppError::from)?)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse),
        (status = 503, description = "Storage unreachable", body = HealthResponse),
    ),
    tag = "system"
)]
pub async fn health<B: Backend>(State(state): State<Arc<AppState<B>>>) -> impl IntoResponse {
    let db_status = match state.backend.health_check().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            "error"
        }
    };

    let status = if db_status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = HealthResponse {
        status: if db_status == "ok" {
            "healthy"
        } else {
            "unhealthy"
        },
        database: db_status,
    };

    (status, axum::Json(response))
}
