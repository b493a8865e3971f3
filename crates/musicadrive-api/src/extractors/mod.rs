//! Custom Axum extractors.

pub mod auth;
pub mod pagination;

pub use auth::{AdminUser, AuthUser};
pub use pagination::Pagination;
