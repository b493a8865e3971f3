//! Application builder — wires repositories, services, and state into a
//! running Axum server.

use std::sync::Arc;

use sqlx::PgPool;

use musicadrive_auth::jwt::decoder::JwtDecoder;
use musicadrive_auth::jwt::encoder::JwtEncoder;
use musicadrive_auth::password::PasswordHasher;
use musicadrive_core::config::AppConfig;
use musicadrive_core::error::AppError;
use musicadrive_database::repositories::categoria::CategoriaRepository;
use musicadrive_database::repositories::pasta::PastaRepository;
use musicadrive_database::repositories::pedido::PedidoRepository;
use musicadrive_database::repositories::user::UserRepository;
use musicadrive_service::{
    AuthService, CatalogoService, CategoriaService, PedidoService, RelatorioService, UserService,
};

use crate::router::build_router;
use crate::state::AppState;

/// Construct the shared application state from config and a database pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let pasta_repo = Arc::new(PastaRepository::new(db_pool.clone()));
    let pedido_repo = Arc::new(PedidoRepository::new(db_pool.clone()));
    let categoria_repo = Arc::new(CategoriaRepository::new(db_pool.clone()));
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));

    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
    ));
    let catalogo_service = Arc::new(CatalogoService::new(Arc::clone(&pasta_repo)));
    let categoria_service = Arc::new(CategoriaService::new(Arc::clone(&categoria_repo)));
    let pedido_service = Arc::new(PedidoService::new(
        Arc::clone(&pedido_repo),
        Arc::clone(&pasta_repo),
    ));
    let relatorio_service = Arc::new(RelatorioService::new(Arc::clone(&pedido_repo)));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        config.auth.password_min_length,
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt_decoder,
        auth_service,
        catalogo_service,
        categoria_service,
        pedido_service,
        relatorio_service,
        user_service,
    }
}

/// Runs the MusicaDrive server with the given configuration and pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = config.server.bind_address();
    let state = build_state(config, db_pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("MusicaDrive server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
