use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::time::Duration;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::Config;
use crate::middleware::trace_id;
use crate::routes::{health, home, produtos, produtos_api, usuarios};
use crate::services::{ProductService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub products: ProductService,
    pub users: UserService,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let state = AppState {
        products: ProductService::new(pool.clone()),
        users: UserService::new(pool.clone()),
        pool,
    };

    // JSON surface, products only. Registered before the HTML routes so the
    // static /produtos/api segment wins over the /produtos/:id parameter.
    let api_routes = Router::new()
        .route(
            "/produtos/api",
            get(produtos_api::listar).post(produtos_api::criar),
        )
        .route(
            "/produtos/api/:id",
            get(produtos_api::obter)
                .put(produtos_api::atualizar)
                .delete(produtos_api::deletar),
        );

    let produto_routes = Router::new()
        .route("/produtos", get(produtos::listar))
        .route("/produtos/", get(produtos::listar))
        .route(
            "/produtos/cadastrar",
            get(produtos::form_cadastrar).post(produtos::cadastrar),
        )
        .route("/produtos/:id", get(produtos::detalhes))
        .route(
            "/produtos/:id/editar",
            get(produtos::form_editar).post(produtos::editar),
        )
        .route("/produtos/:id/deletar", post(produtos::deletar));

    let usuario_routes = Router::new()
        .route("/usuarios", get(usuarios::listar))
        .route("/usuarios/", get(usuarios::listar))
        .route(
            "/usuarios/cadastrar",
            get(usuarios::form_cadastrar).post(usuarios::cadastrar),
        )
        .route("/usuarios/:id", get(usuarios::detalhes))
        .route(
            "/usuarios/:id/editar",
            get(usuarios::form_editar).post(usuarios::editar),
        )
        .route("/usuarios/:id/deletar", post(usuarios::deletar));

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::ready))
        .route("/health/live", get(health::live));

    Router::new()
        .route("/", get(home::home))
        .merge(health_routes)
        .merge(api_routes)
        .merge(produto_routes)
        .merge(usuario_routes)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .with_state(state)
}
