//! Derived cart totals and the checkout-eligibility flag.

use serde::{Deserialize, Serialize};

use super::state::CartState;

/// Everything the cart UI needs to render and to gate checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of quantities across all lines.
    pub total_itens: u32,
    /// Sum of track counts weighted by quantity.
    pub total_musicas: i64,
    /// Sum of sizes in gigabytes weighted by quantity.
    pub total_tamanho_gb: f64,
    /// Sum of prices weighted by quantity.
    pub total_valor: f64,
    /// Percentage of the selected capacity in use, clamped to 100 for
    /// display. The eligibility check below uses the unclamped sizes.
    pub capacity_used_pct: f64,
    /// Whether checkout is allowed: at least one item and everything fits.
    pub can_checkout: bool,
}

impl CartState {
    /// Compute the derived totals of the current state.
    pub fn totals(&self) -> CartTotals {
        let total_itens: u32 = self.items.iter().map(|i| i.quantidade).sum();
        let total_musicas: i64 = self
            .items
            .iter()
            .map(|i| i64::from(i.pasta.qtd_musicas) * i64::from(i.quantidade))
            .sum();
        let total_tamanho_gb: f64 = self
            .items
            .iter()
            .map(|i| i.pasta.tamanho_gb * f64::from(i.quantidade))
            .sum();
        let total_valor: f64 = self
            .items
            .iter()
            .map(|i| i.pasta.preco * f64::from(i.quantidade))
            .sum();

        let capacity = f64::from(self.pendrive_size.as_gb());
        let capacity_used_pct = (total_tamanho_gb / capacity) * 100.0;

        CartTotals {
            total_itens,
            total_musicas,
            total_tamanho_gb,
            total_valor,
            capacity_used_pct: capacity_used_pct.min(100.0),
            can_checkout: total_itens > 0 && total_tamanho_gb <= capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::action::CartAction;
    use crate::pasta::Pasta;
    use crate::pendrive::PendriveSize;
    use chrono::Utc;
    use uuid::Uuid;

    fn pasta(musicas: i32, gb: f64, preco: f64) -> Pasta {
        Pasta {
            id: Uuid::new_v4(),
            nome: "Pasta".to_string(),
            codigo: None,
            qtd_musicas: musicas,
            tamanho_gb: gb,
            preco,
            capa_url: None,
            descricao: None,
            genero: None,
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn cart_with(p: Pasta, quantidade: u32, size: PendriveSize) -> CartState {
        let mut cart = CartState::new()
            .apply(CartAction::SetPendriveSize { size })
            .apply(CartAction::AddItem {
                pasta: Box::new(p.clone()),
            });
        cart = cart.apply(CartAction::UpdateQuantity {
            pasta_id: p.id,
            quantidade,
        });
        cart
    }

    #[test]
    fn test_spec_example_three_units_on_2gb() {
        let cart = cart_with(pasta(50, 0.5, 10.0), 3, PendriveSize::Gb2);
        let t = cart.totals();
        assert_eq!(t.total_itens, 3);
        assert_eq!(t.total_musicas, 150);
        assert_eq!(t.total_tamanho_gb, 1.5);
        assert_eq!(t.total_valor, 30.0);
        assert_eq!(t.capacity_used_pct, 75.0);
        assert!(t.can_checkout);
    }

    #[test]
    fn test_over_capacity_clamps_display_but_blocks_checkout() {
        // 5 x 0.5 GB on a 2 GB drive: ratio is 125%, display clamps to 100.
        let cart = cart_with(pasta(50, 0.5, 10.0), 5, PendriveSize::Gb2);
        let t = cart.totals();
        assert_eq!(t.total_tamanho_gb, 2.5);
        assert_eq!(t.capacity_used_pct, 100.0);
        assert!(!t.can_checkout);
    }

    #[test]
    fn test_empty_cart_cannot_checkout() {
        let t = CartState::new().totals();
        assert_eq!(t.total_itens, 0);
        assert_eq!(t.total_tamanho_gb, 0.0);
        assert_eq!(t.capacity_used_pct, 0.0);
        assert!(!t.can_checkout);
    }

    #[test]
    fn test_removing_last_item_resets_totals() {
        let p = pasta(40, 0.4, 8.0);
        let cart = CartState::new()
            .apply(CartAction::AddItem {
                pasta: Box::new(p.clone()),
            })
            .apply(CartAction::RemoveItem { pasta_id: p.id });
        let t = cart.totals();
        assert!(cart.is_empty());
        assert_eq!(t.capacity_used_pct, 0.0);
        assert!(!t.can_checkout);
    }

    #[test]
    fn test_exact_fit_allows_checkout() {
        let cart = cart_with(pasta(100, 1.0, 10.0), 2, PendriveSize::Gb2);
        let t = cart.totals();
        assert_eq!(t.total_tamanho_gb, 2.0);
        assert_eq!(t.capacity_used_pct, 100.0);
        assert!(t.can_checkout);
    }
}
