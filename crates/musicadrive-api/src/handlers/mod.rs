//! HTTP request handlers, organized by domain.

pub mod auth;
pub mod categoria;
pub mod health;
pub mod pasta;
pub mod pedido;
pub mod relatorio;
pub mod user;
