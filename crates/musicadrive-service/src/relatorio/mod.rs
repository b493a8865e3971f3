//! Sales reporting: in-memory aggregation over a period, CSV export, and
//! best-seller ranking.

pub mod aggregation;
pub mod csv;
pub mod service;

pub use aggregation::{
    RelatorioVendas, ResumoVendas, VendaPorDia, VendaPorPagamento, VendaPorStatus, agregar_vendas,
};
pub use service::RelatorioService;
