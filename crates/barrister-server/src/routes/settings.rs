use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::response::IntoResponse;

use barrister_core::models::SettingsPatch;
use barrister_core::{Backend, SettingsService};

use crate::dto::{SettingsRequest, SettingsResponse};
use crate::error::ApiError;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/firm-settings",
    responses(
        (status = 200, description = "The firm settings, or null before the first save", body = Option<SettingsResponse>),
        (status = 400, description = "Request failed", body = crate::dto::ErrorResponse),
    ),
    tag = "settings"
)]
pub async fn get_settings<B: Backend>(
    State(state): State<Arc<AppState<B>>>,
) -> Result<impl IntoResponse, ApiError> {
    let settings = SettingsService::new(state.backend.settings()).get().await?;
    Ok(axum::Json(settings.map(SettingsResponse::from)))
}

#[utoipa::path(
    post,
    path = "/firm-settings",
    request_body = SettingsRequest,
    responses(
        (status = 200, description = "The settings after the merge", body = SettingsResponse),
        (status = 400, description = "Validation failed", body = crate::dto::ValidationErrorResponse),
    ),
    tag = "settings"
)]
pub async fn upsert_settings<B: Backend>(
    State(state): State<Arc<AppState<B>>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = super::json_body(body)?;
    let patch = SettingsPatch::from_json(&body)?;

    let settings = SettingsService::new(state.backend.settings())
        .upsert(patch)
        .await?;

    Ok(axum::Json(SettingsResponse::from(settings)))
}
