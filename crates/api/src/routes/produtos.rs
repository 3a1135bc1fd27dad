//! Product HTML handlers.
//!
//! Validation failures re-render the submitted form with every violation
//! listed and the input echoed back; successful mutations answer 303 to the
//! follow-up page with a flash code in the query string.

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use domain::models::ProductInput;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::AuditContext;
use crate::routes::FlashQuery;
use crate::views::{self, Flash};

/// Shown in a re-rendered form when the failure is not the user's fault.
const GENERIC_ERROR: &str = "Erro interno no servidor";

pub async fn listar(
    State(state): State<AppState>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>, ApiError> {
    let products = state.products.list().await?;
    Ok(views::products::list(&products, query.message()))
}

pub async fn form_cadastrar() -> Html<String> {
    views::products::create_form(&[], None)
}

pub async fn cadastrar(
    State(state): State<AppState>,
    AuditContext(context): AuditContext,
    Form(input): Form<ProductInput>,
) -> Result<Response, ApiError> {
    match state.products.create(&input, context).await {
        Ok(_) => Ok(redirect_to_list(Flash::ProductCreated)),
        Err(ApiError::Validation(errors)) => {
            Ok(views::products::create_form(&errors, Some(&input)).into_response())
        }
        Err(ApiError::Internal(detail)) => {
            tracing::error!("Failed to create product: {}", detail);
            Ok(
                views::products::create_form(&[GENERIC_ERROR.to_string()], Some(&input))
                    .into_response(),
            )
        }
        Err(err) => Err(err),
    }
}

pub async fn detalhes(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>, ApiError> {
    let product = state.products.get(id).await?;
    Ok(views::products::detail(&product, query.message()))
}

pub async fn form_editar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    let product = state.products.get(id).await?;
    let input = ProductInput {
        name: product.name,
        description: product.description,
        price: product.price,
        stock: product.stock,
    };
    Ok(views::products::edit_form(id, &[], &input))
}

pub async fn editar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AuditContext(context): AuditContext,
    Form(input): Form<ProductInput>,
) -> Result<Response, ApiError> {
    match state.products.update(id, &input, context).await {
        Ok(()) => {
            let url = format!("/produtos/{}?flash={}", id, Flash::ProductUpdated.code());
            Ok(Redirect::to(&url).into_response())
        }
        Err(ApiError::Validation(errors)) => {
            Ok(views::products::edit_form(id, &errors, &input).into_response())
        }
        Err(ApiError::Internal(detail)) => {
            tracing::error!(product_id = id, "Failed to update product: {}", detail);
            Ok(
                views::products::edit_form(id, &[GENERIC_ERROR.to_string()], &input)
                    .into_response(),
            )
        }
        Err(err) => Err(err),
    }
}

pub async fn deletar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AuditContext(context): AuditContext,
) -> Result<Response, ApiError> {
    state.products.delete(id, context).await?;
    Ok(redirect_to_list(Flash::ProductDeleted))
}

fn redirect_to_list(flash: Flash) -> Response {
    Redirect::to(&format!("/produtos/?flash={}", flash.code())).into_response()
}
