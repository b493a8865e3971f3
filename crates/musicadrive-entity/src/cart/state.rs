//! Cart state: selected pastas plus the chosen pendrive capacity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pasta::Pasta;
use crate::pendrive::PendriveSize;

/// One cart line: a pasta and the requested quantity.
///
/// The full pasta is kept so totals can be computed offline; the catalog is
/// not consulted again until checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// The selected pasta.
    pub pasta: Pasta,
    /// Requested quantity, always >= 1 (a line at 0 is removed).
    pub quantidade: u32,
}

/// The full cart of one client session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    /// Selected lines, in insertion order.
    pub items: Vec<CartItem>,
    /// The pendrive capacity the customer intends to bring.
    pub pendrive_size: PendriveSize,
}

impl CartState {
    /// An empty cart with the default 16 GB capacity.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            pendrive_size: PendriveSize::default(),
        }
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the line for a pasta id, if present.
    pub fn line(&self, pasta_id: Uuid) -> Option<&CartItem> {
        self.items.iter().find(|item| item.pasta.id == pasta_id)
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
