use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{RawQuery, State};
use axum::response::IntoResponse;

use barrister_core::models::{CaseUpdate, NewCase};
use barrister_core::{Backend, CaseService};

use crate::dto::{
    CaseLookup, CaseResponse, CreateCaseRequest, CreatedResponse, IdQuery, OkResponse,
    UpdateCaseRequest,
};
use crate::error::ApiError;
use crate::state::AppState;

fn service<B: Backend>(state: &AppState<B>) -> CaseService<B::Cases> {
    CaseService::new(state.backend.cases())
}

#[utoipa::path(
    get,
    path = "/cases",
    params(IdQuery),
    responses(
        (status = 200, description = "All cases newest first, or the single case (null if unknown) when `id` is given", body = CaseLookup),
        (status = 400, description = "Request failed", body = crate::dto::ErrorResponse),
    ),
    tag = "cases"
)]
pub async fn get_cases<B: Backend>(
    State(state): State<Arc<AppState<B>>>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, ApiError> {
    let service = service(&state);

    let body = match IdQuery::from_raw(query.as_deref()).id() {
        Some(id) => CaseLookup::One(service.get(&id).await?.map(CaseResponse::from)),
        None => CaseLookup::All(
            service
                .list()
                .await?
                .into_iter()
                .map(CaseResponse::from)
                .collect(),
        ),
    };

    Ok(axum::Json(body))
}

#[utoipa::path(
    post,
    path = "/cases",
    request_body = CreateCaseRequest,
    responses(
        (status = 200, description = "Case created", body = CreatedResponse),
        (status = 400, description = "Validation failed", body = crate::dto::ValidationErrorResponse),
    ),
    tag = "cases"
)]
pub async fn create_case<B: Backend>(
    State(state): State<Arc<AppState<B>>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = super::json_body(body)?;
    let new = NewCase::from_json(&body)?;

    let id = service(&state).create(new).await?;

    Ok(axum::Json(CreatedResponse::new(id)))
}

#[utoipa::path(
    put,
    path = "/cases",
    request_body = UpdateCaseRequest,
    responses(
        (status = 200, description = "The case after the update, or null if no case has that id", body = Option<CaseResponse>),
        (status = 400, description = "Validation failed", body = crate::dto::ValidationErrorResponse),
    ),
    tag = "cases"
)]
pub async fn update_case<B: Backend>(
    State(state): State<Arc<AppState<B>>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = super::json_body(body)?;
    let update = CaseUpdate::from_json(&body)?;

    let updated = service(&state).update(update).await?;

    Ok(axum::Json(updated.map(CaseResponse::from)))
}

#[utoipa::path(
    delete,
    path = "/cases",
    params(IdQuery),
    responses(
        (status = 200, description = "Case deleted (or already absent)", body = OkResponse),
        (status = 400, description = "Missing id", body = crate::dto::ErrorResponse),
    ),
    tag = "cases"
)]
pub async fn delete_case<B: Backend>(
    State(state): State<Arc<AppState<B>>>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, ApiError> {
    let id = IdQuery::from_raw(query.as_deref())
        .id()
        .ok_or(ApiError::MissingId)?;

    service(&state).delete(&id).await?;

    Ok(axum::Json(OkResponse { ok: true }))
}
