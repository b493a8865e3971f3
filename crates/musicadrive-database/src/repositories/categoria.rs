//! Categoria repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use musicadrive_core::error::{AppError, ErrorKind};
use musicadrive_core::result::AppResult;
use musicadrive_entity::categoria::{Categoria, CreateCategoria, UpdateCategoria};

/// Repository for genre label CRUD.
#[derive(Debug, Clone)]
pub struct CategoriaRepository {
    pool: PgPool,
}

impl CategoriaRepository {
    /// Create a new categoria repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a categoria by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Categoria>> {
        sqlx::query_as::<_, Categoria>("SELECT * FROM categorias WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find categoria", e))
    }

    /// List all categorias, alphabetically.
    pub async fn find_all(&self) -> AppResult<Vec<Categoria>> {
        sqlx::query_as::<_, Categoria>("SELECT * FROM categorias ORDER BY nome ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categorias", e))
    }

    /// Create a new categoria.
    pub async fn create(&self, data: &CreateCategoria) -> AppResult<Categoria> {
        sqlx::query_as::<_, Categoria>(
            "INSERT INTO categorias (nome, descricao, cor) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.nome)
        .bind(&data.descricao)
        .bind(&data.cor)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create categoria", e))
    }

    /// Update an existing categoria. `None` fields are left unchanged.
    pub async fn update(&self, id: Uuid, data: &UpdateCategoria) -> AppResult<Option<Categoria>> {
        sqlx::query_as::<_, Categoria>(
            "UPDATE categorias SET \
                nome = COALESCE($2, nome), \
                descricao = COALESCE($3, descricao), \
                cor = COALESCE($4, cor), \
                is_active = COALESCE($5, is_active), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.nome)
        .bind(&data.descricao)
        .bind(&data.cor)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update categoria", e))
    }

    /// Delete a categoria. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM categorias WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete categoria", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
