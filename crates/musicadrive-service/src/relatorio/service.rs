//! Report use cases over a date window.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use musicadrive_core::error::AppError;
use musicadrive_database::repositories::pedido::{PedidoRepository, TopPastaRow};

use crate::context::RequestContext;

use super::aggregation::{RelatorioVendas, agregar_vendas};
use super::csv::exportar_pedidos;

/// Default size of the best-seller ranking.
const TOP_PASTAS_PADRAO: i64 = 10;

/// Builds sales reports and exports.
#[derive(Debug, Clone)]
pub struct RelatorioService {
    /// Pedido repository.
    pedido_repo: Arc<PedidoRepository>,
}

impl RelatorioService {
    /// Creates a new report service.
    pub fn new(pedido_repo: Arc<PedidoRepository>) -> Self {
        Self { pedido_repo }
    }

    /// Aggregated sales report for a period.
    pub async fn vendas(
        &self,
        ctx: &RequestContext,
        inicio: DateTime<Utc>,
        fim: DateTime<Utc>,
    ) -> Result<RelatorioVendas, AppError> {
        Self::validar_periodo(inicio, fim)?;
        let pedidos = self.pedido_repo.find_between(inicio, fim).await?;
        info!(
            %inicio, %fim,
            pedidos = pedidos.len(),
            actor = %ctx.name,
            "Sales report generated"
        );
        Ok(agregar_vendas(&pedidos))
    }

    /// Best-selling pastas of a period, by units sold.
    pub async fn top_pastas(
        &self,
        _ctx: &RequestContext,
        inicio: DateTime<Utc>,
        fim: DateTime<Utc>,
        limit: Option<i64>,
    ) -> Result<Vec<TopPastaRow>, AppError> {
        Self::validar_periodo(inicio, fim)?;
        let limit = limit.unwrap_or(TOP_PASTAS_PADRAO).clamp(1, 100);
        self.pedido_repo.top_pastas(inicio, fim, limit).await
    }

    /// CSV export of a period's pedidos.
    pub async fn exportar_csv(
        &self,
        ctx: &RequestContext,
        inicio: DateTime<Utc>,
        fim: DateTime<Utc>,
    ) -> Result<String, AppError> {
        Self::validar_periodo(inicio, fim)?;
        let pedidos = self.pedido_repo.find_between(inicio, fim).await?;
        info!(
            %inicio, %fim,
            pedidos = pedidos.len(),
            actor = %ctx.name,
            "CSV export generated"
        );
        Ok(exportar_pedidos(&pedidos))
    }

    fn validar_periodo(inicio: DateTime<Utc>, fim: DateTime<Utc>) -> Result<(), AppError> {
        if inicio > fim {
            return Err(AppError::validation("Period start must not be after its end"));
        }
        Ok(())
    }
}
