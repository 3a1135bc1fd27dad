//! User HTML handlers.
//!
//! Same shape as the product handlers, with one extra recovered failure:
//! a duplicate email re-renders the form with the conflict message instead
//! of surfacing an error page.

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use domain::models::UserInput;

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
    let users = state.users.list().await?;
    Ok(views::users::list(&users, query.message()))
}

pub async fn form_cadastrar() -> Html<String> {
    views::users::create_form(&[], None)
}

pub async fn cadastrar(
    State(state): State<AppState>,
    AuditContext(context): AuditContext,
    Form(input): Form<UserInput>,
) -> Result<Response, ApiError> {
    match state.users.create(&input, context).await {
        Ok(_) => Ok(redirect_to_list(Flash::UserCreated)),
        Err(ApiError::Validation(errors)) => {
            Ok(views::users::create_form(&errors, Some(&input)).into_response())
        }
        Err(ApiError::Conflict(message)) => {
            Ok(views::users::create_form(&[message], Some(&input)).into_response())
        }
        Err(ApiError::Internal(detail)) => {
            tracing::error!("Failed to create user: {}", detail);
            Ok(
                views::users::create_form(&[GENERIC_ERROR.to_string()], Some(&input))
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
    let user = state.users.get(id).await?;
    Ok(views::users::detail(&user, query.message()))
}

pub async fn form_editar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    let user = state.users.get(id).await?;
    let input = UserInput {
        name: user.name,
        email: user.email,
        password: None,
    };
    Ok(views::users::edit_form(id, &[], &input))
}

pub async fn editar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AuditContext(context): AuditContext,
    Form(input): Form<UserInput>,
) -> Result<Response, ApiError> {
    match state.users.update(id, &input, context).await {
        Ok(()) => {
            let url = format!("/usuarios/{}?flash={}", id, Flash::UserUpdated.code());
            Ok(Redirect::to(&url).into_response())
        }
        Err(ApiError::Validation(errors)) => {
            Ok(views::users::edit_form(id, &errors, &input).into_response())
        }
        Err(ApiError::Conflict(message)) => {
            Ok(views::users::edit_form(id, &[message], &input).into_response())
        }
        Err(ApiError::Internal(detail)) => {
            tracing::error!(user_id = id, "Failed to update user: {}", detail);
            Ok(views::users::edit_form(id, &[GENERIC_ERROR.to_string()], &input).into_response())
        }
        Err(err) => Err(err),
    }
}

pub async fn deletar(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AuditContext(context): AuditContext,
) -> Result<Response, ApiError> {
    state.users.delete(id, context).await?;
    Ok(redirect_to_list(Flash::UserDeleted))
}

fn redirect_to_list(flash: Flash) -> Response {
    Redirect::to(&format!("/usuarios/?flash={}", flash.code())).into_response()
}
