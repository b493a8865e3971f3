//! Cart actions and the pure reducer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::state::{CartItem, CartState};
use crate::pasta::Pasta;
use crate::pendrive::PendriveSize;

/// The tagged union of every cart transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartAction {
    /// Add one unit of a pasta: increments the existing line or appends a
    /// new line with quantity 1.
    AddItem {
        /// The pasta to add.
        pasta: Box<Pasta>,
    },
    /// Remove the line for a pasta entirely, regardless of quantity.
    RemoveItem {
        /// The pasta id to remove.
        pasta_id: Uuid,
    },
    /// Replace a line's quantity. A value of 0 removes the line.
    UpdateQuantity {
        /// The pasta id to update.
        pasta_id: Uuid,
        /// The new quantity.
        quantidade: u32,
    },
    /// Remove all lines. The selected capacity is kept.
    ClearCart,
    /// Select a different pendrive capacity.
    SetPendriveSize {
        /// The new capacity.
        size: PendriveSize,
    },
}

impl CartState {
    /// Apply an action, returning the next state.
    ///
    /// Pure: no I/O, no hidden counters. The owning session persists the
    /// result after every call (see [`super::storage`]).
    pub fn apply(&self, action: CartAction) -> CartState {
        match action {
            CartAction::AddItem { pasta } => {
                let mut next = self.clone();
                match next.items.iter_mut().find(|i| i.pasta.id == pasta.id) {
                    Some(item) => item.quantidade += 1,
                    None => next.items.push(CartItem {
                        pasta: *pasta,
                        quantidade: 1,
                    }),
                }
                next
            }
            CartAction::RemoveItem { pasta_id } => {
                let mut next = self.clone();
                next.items.retain(|i| i.pasta.id != pasta_id);
                next
            }
            CartAction::UpdateQuantity {
                pasta_id,
                quantidade,
            } => {
                let mut next = self.clone();
                if quantidade == 0 {
                    next.items.retain(|i| i.pasta.id != pasta_id);
                } else if let Some(item) = next.items.iter_mut().find(|i| i.pasta.id == pasta_id) {
                    item.quantidade = quantidade;
                }
                next
            }
            CartAction::ClearCart => {
                let mut next = self.clone();
                next.items.clear();
                next
            }
            CartAction::SetPendriveSize { size } => {
                let mut next = self.clone();
                next.pendrive_size = size;
                next
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn pasta(nome: &str, musicas: i32, gb: f64, preco: f64) -> Pasta {
        Pasta {
            id: Uuid::new_v4(),
            nome: nome.to_string(),
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

    #[test]
    fn test_add_appends_then_increments() {
        let p = pasta("Sertanejo 2024", 120, 1.2, 15.0);
        let cart = CartState::new().apply(CartAction::AddItem {
            pasta: Box::new(p.clone()),
        });
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantidade, 1);

        let cart = cart.apply(CartAction::AddItem {
            pasta: Box::new(p.clone()),
        });
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantidade, 2);
    }

    #[test]
    fn test_add_then_remove_is_inverse() {
        let existing = pasta("Forró", 80, 0.8, 12.0);
        let before = CartState::new().apply(CartAction::AddItem {
            pasta: Box::new(existing),
        });

        let p = pasta("Pagode", 60, 0.6, 10.0);
        let after = before
            .apply(CartAction::AddItem {
                pasta: Box::new(p.clone()),
            })
            .apply(CartAction::RemoveItem { pasta_id: p.id });

        assert_eq!(after, before);
    }

    #[test]
    fn test_quantity_zero_is_remove() {
        let p = pasta("MPB", 90, 0.9, 14.0);
        let cart = CartState::new().apply(CartAction::AddItem {
            pasta: Box::new(p.clone()),
        });

        let via_zero = cart.apply(CartAction::UpdateQuantity {
            pasta_id: p.id,
            quantidade: 0,
        });
        let via_remove = cart.apply(CartAction::RemoveItem { pasta_id: p.id });

        assert_eq!(via_zero, via_remove);
        assert!(via_zero.is_empty());
    }

    #[test]
    fn test_update_quantity_replaces_value() {
        let p = pasta("Rock", 100, 1.0, 20.0);
        let cart = CartState::new()
            .apply(CartAction::AddItem {
                pasta: Box::new(p.clone()),
            })
            .apply(CartAction::UpdateQuantity {
                pasta_id: p.id,
                quantidade: 7,
            });
        assert_eq!(cart.items[0].quantidade, 7);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let p = pasta("Axé", 70, 0.7, 11.0);
        let cart = CartState::new()
            .apply(CartAction::SetPendriveSize {
                size: PendriveSize::Gb64,
            })
            .apply(CartAction::AddItem {
                pasta: Box::new(p),
            })
            .apply(CartAction::ClearCart);

        assert!(cart.is_empty());
        assert_eq!(cart.pendrive_size, PendriveSize::Gb64);
    }
}
