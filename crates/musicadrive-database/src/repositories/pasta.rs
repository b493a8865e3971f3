//! Pasta repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use musicadrive_core::error::{AppError, ErrorKind};
use musicadrive_core::result::AppResult;
use musicadrive_core::types::pagination::{PageRequest, PageResponse};
use musicadrive_entity::pasta::{CreatePasta, Pasta, UpdatePasta};

/// Repository for catalog pasta CRUD.
#[derive(Debug, Clone)]
pub struct PastaRepository {
    pool: PgPool,
}

impl PastaRepository {
    /// Create a new pasta repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a pasta by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Pasta>> {
        sqlx::query_as::<_, Pasta>("SELECT * FROM pastas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find pasta", e))
    }

    /// Find several pastas by ID in one round trip.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Pasta>> {
        sqlx::query_as::<_, Pasta>("SELECT * FROM pastas WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find pastas", e))
    }

    /// List pastas visible on the storefront (active only).
    pub async fn find_active(&self) -> AppResult<Vec<Pasta>> {
        sqlx::query_as::<_, Pasta>("SELECT * FROM pastas WHERE is_active = TRUE ORDER BY nome ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list active pastas", e)
            })
    }

    /// List all pastas for the backoffice, paginated.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Pasta>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pastas")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count pastas", e))?;

        let pastas = sqlx::query_as::<_, Pasta>(
            "SELECT * FROM pastas ORDER BY nome ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list pastas", e))?;

        Ok(PageResponse::new(
            pastas,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new pasta.
    pub async fn create(&self, data: &CreatePasta) -> AppResult<Pasta> {
        sqlx::query_as::<_, Pasta>(
            "INSERT INTO pastas (nome, codigo, qtd_musicas, tamanho_gb, preco, capa_url, descricao, genero, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(&data.nome)
        .bind(&data.codigo)
        .bind(data.qtd_musicas)
        .bind(data.tamanho_gb)
        .bind(data.preco)
        .bind(&data.capa_url)
        .bind(&data.descricao)
        .bind(&data.genero)
        .bind(data.is_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create pasta", e))
    }

    /// Update an existing pasta. `None` fields are left unchanged.
    pub async fn update(&self, id: Uuid, data: &UpdatePasta) -> AppResult<Option<Pasta>> {
        sqlx::query_as::<_, Pasta>(
            "UPDATE pastas SET \
                nome = COALESCE($2, nome), \
                codigo = COALESCE($3, codigo), \
                qtd_musicas = COALESCE($4, qtd_musicas), \
                tamanho_gb = COALESCE($5, tamanho_gb), \
                preco = COALESCE($6, preco), \
                capa_url = COALESCE($7, capa_url), \
                descricao = COALESCE($8, descricao), \
                genero = COALESCE($9, genero), \
                is_active = COALESCE($10, is_active), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.nome)
        .bind(&data.codigo)
        .bind(data.qtd_musicas)
        .bind(data.tamanho_gb)
        .bind(data.preco)
        .bind(&data.capa_url)
        .bind(&data.descricao)
        .bind(&data.genero)
        .bind(data.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update pasta", e))
    }

    /// Count order line items referencing a pasta.
    ///
    /// Drives the delete gate: a referenced pasta can only be deactivated.
    pub async fn count_referencias(&self, pasta_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM pedido_itens WHERE pasta_id = $1")
            .bind(pasta_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count pasta references", e)
            })
    }

    /// Hard-delete a pasta. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM pastas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete pasta", e))?;

        Ok(result.rows_affected() > 0)
    }
}
