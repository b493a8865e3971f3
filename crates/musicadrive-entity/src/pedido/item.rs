//! Pedido line items — frozen snapshots of catalog pastas.
//!
//! One row represents exactly one unit: an order for three copies of the
//! same pasta carries three item rows. The snapshot fields are copied from
//! the catalog at insertion time so later catalog edits never alter
//! historical pedidos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::pasta::Pasta;

/// Frozen catalog values every line item carries.
///
/// The totals recalculation reads only these; it never consults the live
/// catalog.
pub trait ItemCongelado {
    /// Track count frozen at insertion time.
    fn qtd_musicas(&self) -> i32;
    /// Size in gigabytes frozen at insertion time.
    fn tamanho_gb(&self) -> f64;
    /// Unit price frozen at insertion time.
    fn preco_unit(&self) -> f64;
}

/// A persisted line item of a pedido (one unit of one pasta).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PedidoItem {
    /// Unique item identifier.
    pub id: Uuid,
    /// The pedido this item belongs to.
    pub pedido_id: Uuid,
    /// The originating pasta.
    pub pasta_id: Uuid,
    /// Pasta name at insertion time.
    pub nome_pasta: String,
    /// Track count at insertion time.
    pub qtd_musicas: i32,
    /// Size in gigabytes at insertion time.
    pub tamanho_gb: f64,
    /// Unit price at insertion time.
    pub preco_unit: f64,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
}

/// A line item about to be persisted (no ids assigned yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NovoPedidoItem {
    /// The originating pasta.
    pub pasta_id: Uuid,
    /// Pasta name at insertion time.
    pub nome_pasta: String,
    /// Track count at insertion time.
    pub qtd_musicas: i32,
    /// Size in gigabytes at insertion time.
    pub tamanho_gb: f64,
    /// Unit price at insertion time.
    pub preco_unit: f64,
}

impl NovoPedidoItem {
    /// Freeze the current catalog values of a pasta into a new line item.
    pub fn snapshot(pasta: &Pasta) -> Self {
        Self {
            pasta_id: pasta.id,
            nome_pasta: pasta.nome.clone(),
            qtd_musicas: pasta.qtd_musicas,
            tamanho_gb: pasta.tamanho_gb,
            preco_unit: pasta.preco,
        }
    }
}

impl ItemCongelado for PedidoItem {
    fn qtd_musicas(&self) -> i32 {
        self.qtd_musicas
    }

    fn tamanho_gb(&self) -> f64 {
        self.tamanho_gb
    }

    fn preco_unit(&self) -> f64 {
        self.preco_unit
    }
}

impl ItemCongelado for NovoPedidoItem {
    fn qtd_musicas(&self) -> i32 {
        self.qtd_musicas
    }

    fn tamanho_gb(&self) -> f64 {
        self.tamanho_gb
    }

    fn preco_unit(&self) -> f64 {
        self.preco_unit
    }
}
