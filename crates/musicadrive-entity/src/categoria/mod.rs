//! Categoria (genre label) entity.

pub mod model;

pub use model::{Categoria, CreateCategoria, UpdateCategoria};
