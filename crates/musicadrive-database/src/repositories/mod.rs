//! Concrete repository implementations.

pub mod categoria;
pub mod pasta;
pub mod pedido;
pub mod user;

pub use categoria::CategoriaRepository;
pub use pasta::PastaRepository;
pub use pedido::PedidoRepository;
pub use user::UserRepository;
