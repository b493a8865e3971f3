//! Request DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use musicadrive_entity::pedido::{
    CreatePedido, FormaPagamento, ItemPedidoRequest, PedidoStatus,
};
use musicadrive_entity::pendrive::PendriveSize;
use musicadrive_entity::user::UserRole;

/// Staff login request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Plain-text password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Token refresh request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// The refresh token issued at login.
    pub refresh_token: String,
}

/// One cart line of a storefront checkout.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckoutItem {
    /// The pasta being purchased.
    pub pasta_id: Uuid,
    /// Units of that pasta (default 1).
    #[serde(default = "default_quantidade")]
    #[validate(range(min = 1, max = 500))]
    pub quantidade: u32,
}

fn default_quantidade() -> u32 {
    1
}

/// Storefront checkout request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckoutRequest {
    /// Customer display name.
    #[validate(length(min = 1, max = 120))]
    pub cliente_nome: String,
    /// Customer contact (phone/WhatsApp).
    #[validate(length(min = 1, max = 60))]
    pub cliente_contato: String,
    /// Declared pendrive capacity.
    pub pendrive_gb: PendriveSize,
    /// Declared payment method.
    pub forma_pagamento: FormaPagamento,
    /// Free-text notes.
    pub observacoes: Option<String>,
    /// Cart lines.
    #[validate(length(min = 1), nested)]
    pub itens: Vec<CheckoutItem>,
}

impl CheckoutRequest {
    /// Converts into the service-layer creation payload.
    pub fn into_create(self) -> CreatePedido {
        CreatePedido {
            cliente_nome: self.cliente_nome,
            cliente_contato: self.cliente_contato,
            pendrive_gb: self.pendrive_gb,
            forma_pagamento: self.forma_pagamento,
            observacoes: self.observacoes,
            itens: self
                .itens
                .into_iter()
                .map(|i| ItemPedidoRequest {
                    pasta_id: i.pasta_id,
                    quantidade: i.quantidade,
                })
                .collect(),
        }
    }
}

/// Replacement item set for a staff pedido edit.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EditItensRequest {
    /// New cart lines; replaces the stored item set entirely.
    #[validate(length(min = 1), nested)]
    pub itens: Vec<CheckoutItem>,
}

/// Status change request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    /// The target status.
    pub status: PedidoStatus,
}

/// Active-flag toggle request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetActiveRequest {
    /// The new active flag.
    pub is_active: bool,
}

/// Staff account creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name.
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    /// Login email.
    #[validate(email)]
    pub email: String,
    /// Plain-text password.
    #[validate(length(min = 8))]
    pub password: String,
    /// Backoffice role.
    pub role: UserRole,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// The new plain-text password.
    #[validate(length(min = 8))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkout(quantidade: u32) -> CheckoutRequest {
        CheckoutRequest {
            cliente_nome: "Maria".to_string(),
            cliente_contato: "(11) 99999-0000".to_string(),
            pendrive_gb: PendriveSize::Gb16,
            forma_pagamento: FormaPagamento::Pix,
            observacoes: None,
            itens: vec![CheckoutItem {
                pasta_id: Uuid::new_v4(),
                quantidade,
            }],
        }
    }

    #[test]
    fn checkout_accepts_small_quantities() {
        assert!(checkout(3).validate().is_ok());
    }

    #[test]
    fn checkout_rejects_oversized_quantity() {
        assert!(checkout(u32::MAX).validate().is_err());
        assert!(checkout(501).validate().is_err());
    }

    #[test]
    fn checkout_rejects_zero_quantity() {
        assert!(checkout(0).validate().is_err());
    }

    #[test]
    fn checkout_rejects_empty_item_list() {
        let mut req = checkout(1);
        req.itens.clear();
        assert!(req.validate().is_err());
    }
}
