use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{RawQuery, State};
use axum::response::IntoResponse;

use barrister_core::models::NewTransaction;
use barrister_core::{Backend, TransactionService};

use crate::dto::{
    CreateTransactionRequest, CreatedResponse, IdQuery, OkResponse, TransactionLookup,
    TransactionResponse,
};
use crate::error::ApiError;
use crate::state::AppState;

fn service<B: Backend>(state: &AppState<B>) -> TransactionService<B::Transactions> {
    TransactionService::new(state.backend.transactions())
}

#[utoipa::path(
    get,
    path = "/financial",
    params(IdQuery),
    responses(
        (status = 200, description = "All transactions newest first, or the single transaction (null if unknown) when `id` is given", body = TransactionLookup),
        (status = 400, description = "Request failed", body = crate::dto::ErrorResponse),
    ),
    tag = "financial"
)]
pub async fn get_transactions<B: Backend>(
    State(state): State<Arc<AppState<B>>>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, ApiError> {
    let service = service(&state);

    let body = match IdQuery::from_raw(query.as_deref()).id() {
        Some(id) => {
            TransactionLookup::One(service.get(&id).await?.map(TransactionResponse::from))
        }
        None => TransactionLookup::All(
            service
                .list()
                .await?
                .into_iter()
                .map(TransactionResponse::from)
                .collect(),
        ),
    };

    Ok(axum::Json(body))
}

#[utoipa::path(
    post,
    path = "/financial",
    request_body = CreateTransactionRequest,
    responses(
        (status = 200, description = "Transaction recorded", body = CreatedResponse),
        (status = 400, description = "Validation failed", body = crate::dto::ValidationErrorResponse),
    ),
    tag = "financial"
)]
pub async fn create_transaction<B: Backend>(
    State(state): State<Arc<AppState<B>>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = super::json_body(body)?;
    let new = NewTransaction::from_json(&body)?;

    let id = service(&state).create(new).await?;

    Ok(axum::Json(CreatedResponse::new(id)))
}

#[utoipa::path(
    delete,
    path = "/financial",
    params(IdQuery),
    responses(
        (status = 200, description = "Transaction deleted (or already absent)", body = OkResponse),
        (status = 400, description = "Missing id", body = crate::dto::ErrorResponse),
    ),
    tag = "financial"
)]
pub async fn delete_transaction<B: Backend>(
    State(state): State<Arc<AppState<B>>>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, ApiError> {
    let id = IdQuery::from_raw(query.as_deref())
        .id()
        .ok_or(ApiError::MissingId)?;

    service(&state).delete(&id).await?;

    Ok(axum::Json(OkResponse { ok: true }))
}
