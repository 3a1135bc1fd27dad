//! Product JSON handlers.
//!
//! Same services, same validation, same audit trail as the HTML surface;
//! only the response shape differs. 201 with the created record, 204 on
//! delete, error bodies carry a code and a message.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use domain::models::{Product, ProductInput};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AuditContext;

pub async fn listar(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.products.list().await?))
}

pub async fn obter(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.products.get(id).await?))
}

pub async fn criar(
    State(state): State<AppState>,
    AuditContext(context): AuditContext,
    Json(input): Json<ProductInput>,
) -> Result<impl IntoResponse, ApiError> {
    let id = state.products.create(&input, context).await?;
    let product = state.products.get(id).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn atualizar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AuditContext(context): AuditContext,
    Json(input): Json<ProductInput>,
) -> Result<Json<Product>, ApiError> {
    state.products.update(id, &input, context).await?;
    Ok(Json(state.products.get(id).await?))
}

pub async fn deletar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AuditContext(context): AuditContext,
) -> Result<StatusCode, ApiError> {
    state.products.delete(id, context).await?;
    Ok(StatusCode::NO_CONTENT)
}
