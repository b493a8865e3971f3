//! Pedido totals recalculation.
//!
//! Used both when a pedido is first placed and whenever staff edit its item
//! set. A pure function over frozen line-item snapshots: it never touches
//! the catalog and has no side effects, so calling it twice with the same
//! inputs yields the same result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use musicadrive_core::{AppError, ErrorKind};

use super::item::ItemCongelado;
use crate::pendrive::PendriveSize;

/// The recomputed summary fields of a pedido.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PedidoTotais {
    /// Number of line items (one per unit).
    pub total_itens: i32,
    /// Sum of frozen track counts.
    pub total_musicas: i64,
    /// Sum of frozen sizes in gigabytes.
    pub total_gb: f64,
    /// Sum of frozen unit prices.
    pub total_valor: f64,
}

impl PedidoTotais {
    /// Totals of an empty item set.
    pub fn zero() -> Self {
        Self {
            total_itens: 0,
            total_musicas: 0,
            total_gb: 0.0,
            total_valor: 0.0,
        }
    }
}

/// The item set does not fit on the declared pendrive.
///
/// Carries both the computed total and the limit so the caller can surface
/// them; the write must be rejected, never clamped or auto-upgraded.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Total size {total_gb} GB exceeds the {capacity} pendrive capacity")]
pub struct CapacityExceeded {
    /// The computed total size of all items, in gigabytes.
    pub total_gb: f64,
    /// The pedido's declared pendrive capacity.
    pub capacity: PendriveSize,
}

impl From<CapacityExceeded> for AppError {
    fn from(e: CapacityExceeded) -> Self {
        AppError::new(ErrorKind::Validation, e.to_string())
    }
}

/// Recompute a pedido's summary fields from its line items and validate
/// them against the declared pendrive capacity.
///
/// An empty item set is permitted here (all totals zero); the "at least
/// one item" rule belongs to the callers. Items are one-per-unit rows, so
/// the item count is simply the slice length.
pub fn recalcular_totais<T: ItemCongelado>(
    itens: &[T],
    pendrive: PendriveSize,
) -> Result<PedidoTotais, CapacityExceeded> {
    let total_gb: f64 = itens.iter().map(|i| i.tamanho_gb()).sum();

    if total_gb > f64::from(pendrive.as_gb()) {
        return Err(CapacityExceeded {
            total_gb,
            capacity: pendrive,
        });
    }

    Ok(PedidoTotais {
        total_itens: itens.len() as i32,
        total_musicas: itens.iter().map(|i| i64::from(i.qtd_musicas())).sum(),
        total_gb,
        total_valor: itens.iter().map(|i| i.preco_unit()).sum(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        musicas: i32,
        gb: f64,
        preco: f64,
    }

    impl ItemCongelado for Item {
        fn qtd_musicas(&self) -> i32 {
            self.musicas
        }
        fn tamanho_gb(&self) -> f64 {
            self.gb
        }
        fn preco_unit(&self) -> f64 {
            self.preco
        }
    }

    fn item(musicas: i32, gb: f64, preco: f64) -> Item {
        Item { musicas, gb, preco }
    }

    #[test]
    fn test_recompute_sums_frozen_fields() {
        let itens = vec![item(50, 0.5, 10.0), item(50, 0.5, 10.0), item(50, 0.5, 10.0)];
        let totais = recalcular_totais(&itens, PendriveSize::Gb2).unwrap();
        assert_eq!(totais.total_itens, 3);
        assert_eq!(totais.total_musicas, 150);
        assert_eq!(totais.total_gb, 1.5);
        assert_eq!(totais.total_valor, 30.0);
    }

    #[test]
    fn test_empty_item_set_is_all_zeros() {
        let itens: Vec<Item> = vec![];
        assert_eq!(
            recalcular_totais(&itens, PendriveSize::Gb2).unwrap(),
            PedidoTotais::zero()
        );
    }

    #[test]
    fn test_capacity_gate_rejects_and_reports_both_numbers() {
        // 2 x 0.5 GB already present, staff add 3 x 3 GB under an 8 GB drive.
        let itens = vec![
            item(10, 0.5, 5.0),
            item(10, 0.5, 5.0),
            item(100, 3.0, 25.0),
            item(100, 3.0, 25.0),
            item(100, 3.0, 25.0),
        ];
        let err = recalcular_totais(&itens, PendriveSize::Gb8).unwrap_err();
        assert_eq!(err.total_gb, 10.0);
        assert_eq!(err.capacity, PendriveSize::Gb8);
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("8"));
    }

    #[test]
    fn test_exact_fit_is_accepted() {
        let itens = vec![item(10, 1.0, 5.0), item(10, 1.0, 5.0)];
        let totais = recalcular_totais(&itens, PendriveSize::Gb2).unwrap();
        assert_eq!(totais.total_gb, 2.0);
    }

    #[test]
    fn test_idempotence() {
        let itens = vec![item(30, 0.7, 12.5), item(45, 1.1, 15.0)];
        let a = recalcular_totais(&itens, PendriveSize::Gb4).unwrap();
        let b = recalcular_totais(&itens, PendriveSize::Gb4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_additivity_over_partitions() {
        let a = vec![item(10, 0.25, 3.0), item(20, 0.5, 6.0)];
        let b = vec![item(5, 0.125, 1.5)];
        let all: Vec<Item> = a
            .iter()
            .chain(b.iter())
            .map(|i| item(i.musicas, i.gb, i.preco))
            .collect();

        let ta = recalcular_totais(&a, PendriveSize::Gb16).unwrap();
        let tb = recalcular_totais(&b, PendriveSize::Gb16).unwrap();
        let tall = recalcular_totais(&all, PendriveSize::Gb16).unwrap();

        assert_eq!(tall.total_itens, ta.total_itens + tb.total_itens);
        assert_eq!(tall.total_musicas, ta.total_musicas + tb.total_musicas);
        assert!((tall.total_gb - (ta.total_gb + tb.total_gb)).abs() < 1e-9);
        assert!((tall.total_valor - (ta.total_valor + tb.total_valor)).abs() < 1e-9);
    }
}
