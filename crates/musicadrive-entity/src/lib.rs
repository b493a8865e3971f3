//! # musicadrive-entity
//!
//! Domain entity models for MusicaDrive. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.
//!
//! The two pure business-rule components live here as well: the shopping
//! cart reducer ([`cart`]) and the order totals recalculator
//! ([`pedido::totais`]).

pub mod cart;
pub mod categoria;
pub mod pasta;
pub mod pedido;
pub mod pendrive;
pub mod user;

pub use pendrive::PendriveSize;
