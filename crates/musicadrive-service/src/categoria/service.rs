//! Categoria use cases.
//!
//! Categorias are free-form genre labels. Pastas reference them by name
//! only, so deleting one never breaks the catalog.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use musicadrive_core::error::AppError;
use musicadrive_database::repositories::categoria::CategoriaRepository;
use musicadrive_entity::categoria::{Categoria, CreateCategoria, UpdateCategoria};

use crate::context::RequestContext;

/// Manages genre labels.
#[derive(Debug, Clone)]
pub struct CategoriaService {
    /// Categoria repository.
    categoria_repo: Arc<CategoriaRepository>,
}

impl CategoriaService {
    /// Creates a new categoria service.
    pub fn new(categoria_repo: Arc<CategoriaRepository>) -> Self {
        Self { categoria_repo }
    }

    /// Lists all categorias.
    pub async fn list(&self) -> Result<Vec<Categoria>, AppError> {
        self.categoria_repo.find_all().await
    }

    /// Gets a categoria by ID.
    pub async fn get(&self, id: Uuid) -> Result<Categoria, AppError> {
        self.categoria_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Categoria not found"))
    }

    /// Creates a new categoria.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateCategoria,
    ) -> Result<Categoria, AppError> {
        if data.nome.trim().is_empty() {
            return Err(AppError::validation("Categoria name cannot be empty"));
        }

        let categoria = self.categoria_repo.create(&data).await?;
        info!(categoria_id = %categoria.id, nome = %categoria.nome, actor = %ctx.name, "Categoria created");
        Ok(categoria)
    }

    /// Updates an existing categoria.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateCategoria,
    ) -> Result<Categoria, AppError> {
        if let Some(nome) = &data.nome {
            if nome.trim().is_empty() {
                return Err(AppError::validation("Categoria name cannot be empty"));
            }
        }

        let categoria = self
            .categoria_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Categoria not found"))?;
        info!(categoria_id = %id, actor = %ctx.name, "Categoria updated");
        Ok(categoria)
    }

    /// Deletes a categoria.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let removed = self.categoria_repo.delete(id).await?;
        if !removed {
            return Err(AppError::not_found("Categoria not found"));
        }
        info!(categoria_id = %id, actor = %ctx.name, "Categoria deleted");
        Ok(())
    }
}
