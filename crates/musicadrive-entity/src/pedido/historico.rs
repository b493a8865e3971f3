//! Ordered status-change history of a pedido.
//!
//! Stored as a JSONB column on the pedido row; in code it is always the
//! typed list below. Serialization happens only at the persistence edge.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::status::PedidoStatus;

/// One entry in a pedido's status history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistroStatus {
    /// The status the pedido was moved to.
    pub status: PedidoStatus,
    /// When the change happened.
    pub timestamp: DateTime<Utc>,
    /// Who made the change (staff name, or `"cliente"` at checkout).
    pub actor: String,
}

impl RegistroStatus {
    /// Create a history entry stamped with the current time.
    pub fn now(status: PedidoStatus, actor: impl Into<String>) -> Self {
        Self {
            status,
            timestamp: Utc::now(),
            actor: actor.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_round_trip() {
        let entries = vec![
            RegistroStatus::now(PedidoStatus::Enviado, "cliente"),
            RegistroStatus::now(PedidoStatus::Pronto, "maria"),
        ];
        let json = serde_json::to_string(&entries).unwrap();
        let back: Vec<RegistroStatus> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entries);
        assert_eq!(back[1].actor, "maria");
    }
}
