//! Route definitions for the MusicaDrive HTTP API.
//!
//! All routes are mounted under `/api`. Storefront routes are public;
//! backoffice routes live under `/api/admin` and require a staff JWT via
//! the `AuthUser`/`AdminUser` extractors.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(storefront_routes())
        .merge(auth_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Public storefront endpoints: browse the catalog, place a pedido.
fn storefront_routes() -> Router<AppState> {
    Router::new()
        .route("/pastas", get(handlers::pasta::list_storefront))
        .route("/categorias", get(handlers::categoria::list_categorias))
        .route("/pedidos", post(handlers::pedido::checkout))
}

/// Auth endpoints: login, refresh, me, own password.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
        .route("/users/me/password", put(handlers::user::change_own_password))
}

/// Staff backoffice endpoints.
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Catalog management
        .route("/admin/pastas", get(handlers::pasta::list_all))
        .route("/admin/pastas", post(handlers::pasta::create_pasta))
        .route("/admin/pastas/{id}", get(handlers::pasta::get_pasta))
        .route("/admin/pastas/{id}", put(handlers::pasta::update_pasta))
        .route("/admin/pastas/{id}", delete(handlers::pasta::delete_pasta))
        .route("/admin/pastas/{id}/active", put(handlers::pasta::set_active))
        // Categoria management
        .route(
            "/admin/categorias",
            post(handlers::categoria::create_categoria),
        )
        .route(
            "/admin/categorias/{id}",
            put(handlers::categoria::update_categoria),
        )
        .route(
            "/admin/categorias/{id}",
            delete(handlers::categoria::delete_categoria),
        )
        // Pedido management
        .route("/admin/pedidos", get(handlers::pedido::list_pedidos))
        .route("/admin/pedidos/{id}", get(handlers::pedido::get_pedido))
        .route("/admin/pedidos/{id}", put(handlers::pedido::update_pedido))
        .route(
            "/admin/pedidos/{id}",
            delete(handlers::pedido::delete_pedido),
        )
        .route(
            "/admin/pedidos/{id}/itens",
            put(handlers::pedido::edit_itens),
        )
        .route(
            "/admin/pedidos/{id}/status",
            put(handlers::pedido::update_status),
        )
        .route(
            "/admin/pedidos/{id}/print",
            get(handlers::pedido::print_pedido),
        )
        // Reports
        .route("/admin/relatorios/vendas", get(handlers::relatorio::vendas))
        .route(
            "/admin/relatorios/top-pastas",
            get(handlers::relatorio::top_pastas),
        )
        .route(
            "/admin/relatorios/export",
            get(handlers::relatorio::export_csv),
        )
        // Account management
        .route("/admin/users", get(handlers::user::list_users))
        .route("/admin/users", post(handlers::user::create_user))
        .route("/admin/users/{id}", put(handlers::user::update_user))
        .route(
            "/admin/users/{id}/active",
            put(handlers::user::set_active),
        )
        .route(
            "/admin/users/{id}/password",
            put(handlers::user::reset_password),
        )
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
