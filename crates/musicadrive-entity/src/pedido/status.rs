//! Pedido status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fulfillment status of a pedido.
///
/// Staff may move a pedido from any non-terminal status to any other
/// status; `Entregue` and `Cancelado` are terminal and lock the pedido
/// against item and field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "pedido_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PedidoStatus {
    /// Submitted by the customer, awaiting staff.
    Enviado,
    /// Staff is copying the folders onto the pendrive.
    EmSeparacao,
    /// Ready for pickup.
    Pronto,
    /// Delivered to the customer (terminal).
    Entregue,
    /// Cancelled (terminal).
    Cancelado,
}

impl PedidoStatus {
    /// Whether this status is terminal (no outgoing transitions).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Entregue | Self::Cancelado)
    }

    /// Whether staff may still edit the pedido's items and fields.
    pub fn allows_edit(&self) -> bool {
        !self.is_terminal()
    }

    /// Whether the pedido may be deleted in this status.
    ///
    /// Delivered pedidos are kept for the sales history; cancelled ones
    /// may still be removed.
    pub fn allows_delete(&self) -> bool {
        !matches!(self, Self::Entregue)
    }

    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enviado => "ENVIADO",
            Self::EmSeparacao => "EM_SEPARACAO",
            Self::Pronto => "PRONTO",
            Self::Entregue => "ENTREGUE",
            Self::Cancelado => "CANCELADO",
        }
    }
}

impl fmt::Display for PedidoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PedidoStatus {
    type Err = musicadrive_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ENVIADO" => Ok(Self::Enviado),
            "EM_SEPARACAO" => Ok(Self::EmSeparacao),
            "PRONTO" => Ok(Self::Pronto),
            "ENTREGUE" => Ok(Self::Entregue),
            "CANCELADO" => Ok(Self::Cancelado),
            _ => Err(musicadrive_core::AppError::validation(format!(
                "Invalid pedido status: '{s}'. Expected one of: ENVIADO, EM_SEPARACAO, PRONTO, ENTREGUE, CANCELADO"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(PedidoStatus::Entregue.is_terminal());
        assert!(PedidoStatus::Cancelado.is_terminal());
        assert!(!PedidoStatus::Enviado.is_terminal());
        assert!(!PedidoStatus::EmSeparacao.is_terminal());
        assert!(!PedidoStatus::Pronto.is_terminal());
    }

    #[test]
    fn test_delete_lock_only_for_delivered() {
        assert!(!PedidoStatus::Entregue.allows_delete());
        assert!(PedidoStatus::Cancelado.allows_delete());
        assert!(PedidoStatus::Enviado.allows_delete());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "EM_SEPARACAO".parse::<PedidoStatus>().unwrap(),
            PedidoStatus::EmSeparacao
        );
        assert!("SHIPPED".parse::<PedidoStatus>().is_err());
    }
}
