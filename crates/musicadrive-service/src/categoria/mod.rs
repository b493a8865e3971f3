//! Genre label management.

pub mod service;

pub use service::CategoriaService;
