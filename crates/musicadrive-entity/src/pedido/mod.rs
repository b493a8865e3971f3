//! Pedido (order) entities and the totals recalculation logic.

pub mod historico;
pub mod item;
pub mod model;
pub mod pagamento;
pub mod status;
pub mod totais;

pub use historico::RegistroStatus;
pub use item::{ItemCongelado, NovoPedidoItem, PedidoItem};
pub use model::{CreatePedido, ItemPedidoRequest, NovoPedido, Pedido};
pub use pagamento::FormaPagamento;
pub use status::PedidoStatus;
pub use totais::{CapacityExceeded, PedidoTotais, recalcular_totais};
