//! Catalog (pasta) management.

pub mod service;

pub use service::CatalogoService;
