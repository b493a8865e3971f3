//! Pedido entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::historico::RegistroStatus;
use super::pagamento::FormaPagamento;
use super::status::PedidoStatus;
use crate::pendrive::PendriveSize;

/// A customer purchase request.
///
/// The aggregate totals are derived fields, recomputed by
/// [`super::totais::recalcular_totais`] whenever the item set changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Pedido {
    /// Unique pedido identifier.
    pub id: Uuid,
    /// Customer display name.
    pub cliente_nome: String,
    /// Customer contact (phone/WhatsApp).
    pub cliente_contato: String,
    /// Declared pendrive capacity the customer will bring.
    pub pendrive_gb: PendriveSize,
    /// Current fulfillment status.
    pub status: PedidoStatus,
    /// Declared payment method.
    pub forma_pagamento: Option<FormaPagamento>,
    /// Free-text staff/customer notes.
    pub observacoes: Option<String>,
    /// Number of line items (one per unit).
    pub total_itens: i32,
    /// Sum of frozen track counts.
    pub total_musicas: i64,
    /// Sum of frozen sizes in gigabytes.
    pub total_gb: f64,
    /// Sum of frozen unit prices.
    pub total_valor: f64,
    /// Ordered status-change history.
    pub historico_status: Json<Vec<RegistroStatus>>,
    /// When the pedido was created.
    pub created_at: DateTime<Utc>,
    /// When the pedido was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Pedido {
    /// Whether staff may still edit this pedido's items and fields.
    pub fn allows_edit(&self) -> bool {
        self.status.allows_edit()
    }

    /// Whether this pedido may be deleted.
    pub fn allows_delete(&self) -> bool {
        self.status.allows_delete()
    }
}

/// One (pasta, quantity) pair of a checkout request.
///
/// Expanded into per-unit line-item rows when the pedido is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemPedidoRequest {
    /// The pasta to add.
    pub pasta_id: Uuid,
    /// Requested quantity (must be >= 1).
    #[serde(default = "default_quantidade")]
    pub quantidade: u32,
}

/// Data required to create a new pedido at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePedido {
    /// Customer display name.
    pub cliente_nome: String,
    /// Customer contact.
    pub cliente_contato: String,
    /// Declared pendrive capacity.
    pub pendrive_gb: PendriveSize,
    /// Declared payment method.
    pub forma_pagamento: FormaPagamento,
    /// Free-text notes.
    pub observacoes: Option<String>,
    /// Requested items.
    pub itens: Vec<ItemPedidoRequest>,
}

/// A fully resolved pedido ready for insertion, totals already validated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NovoPedido {
    /// Customer display name.
    pub cliente_nome: String,
    /// Customer contact.
    pub cliente_contato: String,
    /// Declared pendrive capacity.
    pub pendrive_gb: PendriveSize,
    /// Initial status.
    pub status: PedidoStatus,
    /// Declared payment method.
    pub forma_pagamento: Option<FormaPagamento>,
    /// Free-text notes.
    pub observacoes: Option<String>,
    /// Validated aggregate totals.
    pub totais: super::totais::PedidoTotais,
    /// Initial status history.
    pub historico: Vec<RegistroStatus>,
}

fn default_quantidade() -> u32 {
    1
}
