//! # musicadrive-service
//!
//! Business logic service layer for MusicaDrive. Each service orchestrates
//! repositories and authentication to implement application-level use
//! cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod catalogo;
pub mod categoria;
pub mod context;
pub mod pedido;
pub mod relatorio;
pub mod user;

pub use auth::AuthService;
pub use catalogo::CatalogoService;
pub use categoria::CategoriaService;
pub use context::RequestContext;
pub use pedido::PedidoService;
pub use relatorio::RelatorioService;
pub use user::UserService;
