//! Payment method labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the customer intends to pay.
///
/// Advisory metadata only: there is no payment-processor integration, the
/// label is recorded on the pedido and printed on the receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "forma_pagamento", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormaPagamento {
    /// Cash.
    Dinheiro,
    /// Brazilian instant payment.
    Pix,
    /// Debit card.
    CartaoDebito,
    /// Credit card.
    CartaoCredito,
}

impl FormaPagamento {
    /// Human-readable label for receipts and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dinheiro => "Dinheiro",
            Self::Pix => "PIX",
            Self::CartaoDebito => "Cartão Débito",
            Self::CartaoCredito => "Cartão Crédito",
        }
    }

    /// Return the wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dinheiro => "DINHEIRO",
            Self::Pix => "PIX",
            Self::CartaoDebito => "CARTAO_DEBITO",
            Self::CartaoCredito => "CARTAO_CREDITO",
        }
    }
}

impl fmt::Display for FormaPagamento {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FormaPagamento {
    type Err = musicadrive_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DINHEIRO" => Ok(Self::Dinheiro),
            "PIX" => Ok(Self::Pix),
            "CARTAO_DEBITO" => Ok(Self::CartaoDebito),
            "CARTAO_CREDITO" => Ok(Self::CartaoCredito),
            _ => Err(musicadrive_core::AppError::validation(format!(
                "Invalid payment method: '{s}'"
            ))),
        }
    }
}
