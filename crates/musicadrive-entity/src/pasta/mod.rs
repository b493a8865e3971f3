//! Pasta (sellable music folder) entity.

pub mod model;

pub use model::{CreatePasta, Pasta, UpdatePasta};
