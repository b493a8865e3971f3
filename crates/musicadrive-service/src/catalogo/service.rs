//! Pasta CRUD operations with the referential delete gate.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use musicadrive_core::error::AppError;
use musicadrive_core::types::pagination::{PageRequest, PageResponse};
use musicadrive_database::repositories::pasta::PastaRepository;
use musicadrive_entity::pasta::{CreatePasta, Pasta, UpdatePasta};

use crate::context::RequestContext;

/// Manages the pasta catalog.
#[derive(Debug, Clone)]
pub struct CatalogoService {
    /// Pasta repository.
    pasta_repo: Arc<PastaRepository>,
}

impl CatalogoService {
    /// Creates a new catalog service.
    pub fn new(pasta_repo: Arc<PastaRepository>) -> Self {
        Self { pasta_repo }
    }

    /// Lists the storefront catalog (active pastas only).
    pub async fn list_storefront(&self) -> Result<Vec<Pasta>, AppError> {
        self.pasta_repo.find_active().await
    }

    /// Lists all pastas for the backoffice, paginated.
    pub async fn list_all(
        &self,
        _ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Pasta>, AppError> {
        self.pasta_repo.find_all(&page).await
    }

    /// Gets a pasta by ID.
    pub async fn get(&self, id: Uuid) -> Result<Pasta, AppError> {
        self.pasta_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Pasta not found"))
    }

    /// Creates a new pasta.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreatePasta,
    ) -> Result<Pasta, AppError> {
        if data.nome.trim().is_empty() {
            return Err(AppError::validation("Pasta name cannot be empty"));
        }
        if data.qtd_musicas <= 0 {
            return Err(AppError::validation("Track count must be positive"));
        }
        if data.tamanho_gb <= 0.0 {
            return Err(AppError::validation("Size must be positive"));
        }
        if data.preco < 0.0 {
            return Err(AppError::validation("Price cannot be negative"));
        }

        let pasta = self.pasta_repo.create(&data).await?;
        info!(pasta_id = %pasta.id, nome = %pasta.nome, actor = %ctx.name, "Pasta created");
        Ok(pasta)
    }

    /// Updates an existing pasta.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdatePasta,
    ) -> Result<Pasta, AppError> {
        if let Some(qtd) = data.qtd_musicas {
            if qtd <= 0 {
                return Err(AppError::validation("Track count must be positive"));
            }
        }
        if let Some(gb) = data.tamanho_gb {
            if gb <= 0.0 {
                return Err(AppError::validation("Size must be positive"));
            }
        }
        if let Some(preco) = data.preco {
            if preco < 0.0 {
                return Err(AppError::validation("Price cannot be negative"));
            }
        }

        let pasta = self
            .pasta_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Pasta not found"))?;
        info!(pasta_id = %pasta.id, actor = %ctx.name, "Pasta updated");
        Ok(pasta)
    }

    /// Deletes a pasta.
    ///
    /// A pasta referenced by any order line item is never hard-deleted:
    /// the call fails with a conflict and the caller should deactivate it
    /// instead.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        // 404 before the reference check
        self.get(id).await?;

        let referencias = self.pasta_repo.count_referencias(id).await?;
        if referencias > 0 {
            return Err(AppError::conflict(format!(
                "Pasta is referenced by {referencias} order item(s) and cannot be deleted; deactivate it instead"
            )));
        }

        self.pasta_repo.delete(id).await?;
        info!(pasta_id = %id, actor = %ctx.name, "Pasta deleted");
        Ok(())
    }

    /// Toggles a pasta's storefront visibility.
    pub async fn set_active(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        is_active: bool,
    ) -> Result<Pasta, AppError> {
        let data = UpdatePasta {
            is_active: Some(is_active),
            ..Default::default()
        };
        let pasta = self
            .pasta_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Pasta not found"))?;
        info!(pasta_id = %id, is_active, actor = %ctx.name, "Pasta visibility changed");
        Ok(pasta)
    }
}
