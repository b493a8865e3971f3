//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use musicadrive_auth::jwt::decoder::JwtDecoder;
use musicadrive_core::config::AppConfig;
use musicadrive_service::{
    AuthService, CatalogoService, CategoriaService, PedidoService, RelatorioService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Staff authentication service
    pub auth_service: Arc<AuthService>,
    /// Pasta catalog service
    pub catalogo_service: Arc<CatalogoService>,
    /// Categoria service
    pub categoria_service: Arc<CategoriaService>,
    /// Pedido service
    pub pedido_service: Arc<PedidoService>,
    /// Reporting service
    pub relatorio_service: Arc<RelatorioService>,
    /// Staff account service
    pub user_service: Arc<UserService>,
}
