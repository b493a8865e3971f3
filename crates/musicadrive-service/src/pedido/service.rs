//! Pedido use cases.
//!
//! Both write paths that touch the item set — checkout creation and the
//! staff item editor — freeze catalog snapshots, run the totals
//! recalculation, and reject the whole write when the result does not fit
//! the declared pendrive. Nothing is persisted on rejection.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use musicadrive_core::error::AppError;
use musicadrive_core::types::pagination::{PageRequest, PageResponse};
use musicadrive_database::repositories::pasta::PastaRepository;
use musicadrive_database::repositories::pedido::PedidoRepository;
use musicadrive_entity::pasta::Pasta;
use musicadrive_entity::pedido::{
    CreatePedido, FormaPagamento, ItemPedidoRequest, NovoPedido, NovoPedidoItem, Pedido,
    PedidoItem, PedidoStatus, RegistroStatus, recalcular_totais,
};

use crate::context::RequestContext;

/// Actor recorded in the history for customer-initiated changes.
const ACTOR_CLIENTE: &str = "cliente";

/// Upper bound on per-unit rows in a single pedido.
///
/// Far beyond anything that fits the largest pendrive; bounds the
/// per-unit expansion so the request is rejected before any rows are
/// materialized. Checkout is unauthenticated, so the quantity fields
/// cannot be trusted.
const MAX_UNIDADES: u64 = 500;

/// A pedido together with its line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PedidoDetalhes {
    /// The pedido row.
    pub pedido: Pedido,
    /// Its per-unit line items.
    pub itens: Vec<PedidoItem>,
}

/// Customer-facing fields staff may edit on a pedido.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePedidoDados {
    /// New customer name.
    pub cliente_nome: Option<String>,
    /// New customer contact.
    pub cliente_contato: Option<String>,
    /// New payment method.
    pub forma_pagamento: Option<FormaPagamento>,
    /// New notes.
    pub observacoes: Option<String>,
}

/// Manages pedido creation and staff-side editing.
#[derive(Debug, Clone)]
pub struct PedidoService {
    /// Pedido repository.
    pedido_repo: Arc<PedidoRepository>,
    /// Pasta repository, consulted only to freeze snapshots.
    pasta_repo: Arc<PastaRepository>,
}

impl PedidoService {
    /// Creates a new pedido service.
    pub fn new(pedido_repo: Arc<PedidoRepository>, pasta_repo: Arc<PastaRepository>) -> Self {
        Self {
            pedido_repo,
            pasta_repo,
        }
    }

    /// Creates a pedido from a storefront checkout.
    ///
    /// The item list must be non-empty and fit the declared pendrive;
    /// otherwise nothing is persisted.
    pub async fn criar(&self, data: CreatePedido) -> Result<Pedido, AppError> {
        if data.cliente_nome.trim().is_empty() {
            return Err(AppError::validation("Customer name cannot be empty"));
        }
        if data.cliente_contato.trim().is_empty() {
            return Err(AppError::validation("Customer contact cannot be empty"));
        }

        let itens = self.montar_itens(&data.itens).await?;
        let totais = recalcular_totais(&itens, data.pendrive_gb).map_err(AppError::from)?;

        let novo = NovoPedido {
            cliente_nome: data.cliente_nome.trim().to_string(),
            cliente_contato: data.cliente_contato.trim().to_string(),
            pendrive_gb: data.pendrive_gb,
            status: PedidoStatus::Enviado,
            forma_pagamento: Some(data.forma_pagamento),
            observacoes: data.observacoes.filter(|o| !o.trim().is_empty()),
            totais,
            historico: vec![RegistroStatus::now(PedidoStatus::Enviado, ACTOR_CLIENTE)],
        };

        let pedido = self.pedido_repo.create_com_itens(&novo, &itens).await?;
        info!(
            pedido_id = %pedido.id,
            total_itens = pedido.total_itens,
            total_gb = pedido.total_gb,
            "Pedido created"
        );
        Ok(pedido)
    }

    /// Gets a pedido with its line items.
    pub async fn get(&self, id: Uuid) -> Result<PedidoDetalhes, AppError> {
        let pedido = self.buscar(id).await?;
        let itens = self.pedido_repo.find_itens(id).await?;
        Ok(PedidoDetalhes { pedido, itens })
    }

    /// Lists pedidos, optionally filtered by status.
    pub async fn list(
        &self,
        _ctx: &RequestContext,
        status: Option<PedidoStatus>,
        page: PageRequest,
    ) -> Result<PageResponse<Pedido>, AppError> {
        self.pedido_repo.find_all(status, &page).await
    }

    /// Updates customer-facing fields. Blocked in terminal states.
    pub async fn update_dados(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdatePedidoDados,
    ) -> Result<Pedido, AppError> {
        let pedido = self.buscar(id).await?;
        self.exigir_editavel(&pedido)?;

        let observacoes = normalizar_observacoes(data.observacoes.as_deref());
        let pedido = self
            .pedido_repo
            .update_dados(
                id,
                data.cliente_nome.as_deref(),
                data.cliente_contato.as_deref(),
                data.forma_pagamento,
                observacoes.as_ref().map(|o| o.as_deref()),
            )
            .await?
            .ok_or_else(|| AppError::not_found("Pedido not found"))?;

        info!(pedido_id = %id, actor = %ctx.name, "Pedido updated");
        Ok(pedido)
    }

    /// Replaces a pedido's item set from (pasta, quantity) pairs.
    ///
    /// Fresh snapshots are frozen from the catalog, the totals are
    /// recomputed against the pedido's declared capacity, and the whole
    /// replacement is rejected if it does not fit — the stored items and
    /// totals remain untouched in that case.
    pub async fn editar_itens(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        itens: Vec<ItemPedidoRequest>,
    ) -> Result<PedidoDetalhes, AppError> {
        let pedido = self.buscar(id).await?;
        self.exigir_editavel(&pedido)?;

        let novos = self.montar_itens(&itens).await?;
        let totais = recalcular_totais(&novos, pedido.pendrive_gb).map_err(AppError::from)?;

        let pedido = self.pedido_repo.replace_itens(id, &novos, &totais).await?;
        let itens = self.pedido_repo.find_itens(id).await?;

        info!(
            pedido_id = %id,
            total_itens = pedido.total_itens,
            total_gb = pedido.total_gb,
            actor = %ctx.name,
            "Pedido items replaced"
        );
        Ok(PedidoDetalhes { pedido, itens })
    }

    /// Moves a pedido to a new status, appending to the history.
    ///
    /// Any non-terminal status may move to any status; terminal statuses
    /// have no outgoing transitions.
    pub async fn atualizar_status(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        status: PedidoStatus,
    ) -> Result<Pedido, AppError> {
        let pedido = self.buscar(id).await?;

        if pedido.status.is_terminal() {
            return Err(AppError::validation(format!(
                "Pedido is {} and cannot change status",
                pedido.status
            )));
        }

        let mut historico = pedido.historico_status.0.clone();
        historico.push(RegistroStatus::now(status, ctx.name.clone()));

        let pedido = self
            .pedido_repo
            .update_status(id, status, &historico)
            .await?
            .ok_or_else(|| AppError::not_found("Pedido not found"))?;

        info!(pedido_id = %id, status = %status, actor = %ctx.name, "Pedido status changed");
        Ok(pedido)
    }

    /// Deletes a pedido and its items. Delivered pedidos are kept.
    pub async fn excluir(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let pedido = self.buscar(id).await?;

        if !pedido.allows_delete() {
            return Err(AppError::validation(
                "Delivered pedidos cannot be deleted",
            ));
        }

        self.pedido_repo.delete(id).await?;
        info!(pedido_id = %id, actor = %ctx.name, "Pedido deleted");
        Ok(())
    }

    /// Renders the printable HTML receipt for a pedido.
    pub async fn recibo(&self, id: Uuid) -> Result<String, AppError> {
        let detalhes = self.get(id).await?;
        Ok(super::recibo::render(&detalhes.pedido, &detalhes.itens))
    }

    async fn buscar(&self, id: Uuid) -> Result<Pedido, AppError> {
        self.pedido_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pedido not found"))
    }

    fn exigir_editavel(&self, pedido: &Pedido) -> Result<(), AppError> {
        if !pedido.allows_edit() {
            return Err(AppError::validation(format!(
                "Pedido is {} and can no longer be edited",
                pedido.status
            )));
        }
        Ok(())
    }

    /// Resolve (pasta, quantity) pairs into frozen per-unit snapshots.
    async fn montar_itens(
        &self,
        pedidos: &[ItemPedidoRequest],
    ) -> Result<Vec<NovoPedidoItem>, AppError> {
        validar_quantidades(pedidos)?;

        let ids: Vec<Uuid> = pedidos.iter().map(|i| i.pasta_id).collect();
        let pastas: HashMap<Uuid, Pasta> = self
            .pasta_repo
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        let mut itens = Vec::new();
        for req in pedidos {
            let pasta = pastas.get(&req.pasta_id).ok_or_else(|| {
                AppError::validation(format!("Pasta {} is no longer available", req.pasta_id))
            })?;
            if !pasta.is_active {
                return Err(AppError::validation(format!(
                    "Pasta '{}' is no longer available",
                    pasta.nome
                )));
            }
            // One row per unit: expand the quantity here.
            for _ in 0..req.quantidade {
                itens.push(NovoPedidoItem::snapshot(pasta));
            }
        }
        Ok(itens)
    }
}

/// Normalize the observacoes patch value.
///
/// `None` means the field was not sent and the stored text is kept;
/// a whitespace-only value clears it, mirroring the empty-notes filter
/// on checkout.
fn normalizar_observacoes(valor: Option<&str>) -> Option<Option<String>> {
    valor.map(|v| {
        let v = v.trim();
        (!v.is_empty()).then(|| v.to_string())
    })
}

/// Validate quantities before the per-unit expansion runs.
fn validar_quantidades(itens: &[ItemPedidoRequest]) -> Result<(), AppError> {
    if itens.is_empty() {
        return Err(AppError::validation("Pedido must have at least one item"));
    }
    if itens.iter().any(|i| i.quantidade == 0) {
        return Err(AppError::validation("Item quantity must be at least 1"));
    }
    let unidades: u64 = itens.iter().map(|i| u64::from(i.quantidade)).sum();
    if unidades > MAX_UNIDADES {
        return Err(AppError::validation(format!(
            "Pedido cannot have more than {MAX_UNIDADES} items"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use musicadrive_entity::pedido::ItemPedidoRequest;

    use super::*;

    fn linha(quantidade: u32) -> ItemPedidoRequest {
        ItemPedidoRequest {
            pasta_id: Uuid::new_v4(),
            quantidade,
        }
    }

    #[test]
    fn rejects_empty_item_list() {
        assert!(validar_quantidades(&[]).is_err());
    }

    #[test]
    fn rejects_zero_quantity() {
        assert!(validar_quantidades(&[linha(2), linha(0)]).is_err());
    }

    #[test]
    fn rejects_absurd_quantity_before_expansion() {
        let err = validar_quantidades(&[linha(u32::MAX)]).unwrap_err();
        assert!(err.message.contains("more than"));
    }

    #[test]
    fn rejects_quantities_that_sum_past_the_ceiling() {
        let itens = vec![linha(300), linha(300)];
        assert!(validar_quantidades(&itens).is_err());
    }

    #[test]
    fn accepts_realistic_quantities() {
        assert!(validar_quantidades(&[linha(3), linha(1), linha(10)]).is_ok());
    }

    #[test]
    fn absent_observacoes_keeps_stored_value() {
        assert_eq!(normalizar_observacoes(None), None);
    }

    #[test]
    fn blank_observacoes_clears_stored_value() {
        assert_eq!(normalizar_observacoes(Some("")), Some(None));
        assert_eq!(normalizar_observacoes(Some("   ")), Some(None));
    }

    #[test]
    fn observacoes_are_trimmed_on_update() {
        assert_eq!(
            normalizar_observacoes(Some("  entregar sábado  ")),
            Some(Some("entregar sábado".to_string()))
        );
    }
}
