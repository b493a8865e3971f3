//! # musicadrive-core
//!
//! Shared foundation for MusicaDrive: the unified [`error::AppError`] type,
//! the [`result::AppResult`] alias, TOML-backed configuration, and common
//! request/response types used by every other crate in the workspace.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
