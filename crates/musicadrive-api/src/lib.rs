//! # musicadrive-api
//!
//! HTTP API layer for MusicaDrive built on Axum.
//!
//! Provides the storefront endpoints (catalog listing, checkout), the
//! staff backoffice endpoints (pedido management, catalog CRUD, reports,
//! accounts), middleware (auth, CORS, logging), extractors, DTOs, and
//! error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
