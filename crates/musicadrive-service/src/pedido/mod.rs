//! Pedido lifecycle: checkout creation, staff editing, status tracking,
//! and receipt rendering.

pub mod recibo;
pub mod service;

pub use service::{PedidoDetalhes, PedidoService, UpdatePedidoDados};
