//! Pedido repository implementation.
//!
//! The pedido row and its per-unit item rows always change together, so
//! every multi-row write here runs inside a single transaction.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use musicadrive_core::error::{AppError, ErrorKind};
use musicadrive_core::result::AppResult;
use musicadrive_core::types::pagination::{PageRequest, PageResponse};
use musicadrive_entity::pedido::historico::RegistroStatus;
use musicadrive_entity::pedido::item::{NovoPedidoItem, PedidoItem};
use musicadrive_entity::pedido::model::{NovoPedido, Pedido};
use musicadrive_entity::pedido::status::PedidoStatus;
use musicadrive_entity::pedido::totais::PedidoTotais;

/// One row of the best-selling-pastas report query.
#[derive(Debug, Clone, serde::Serialize, sqlx::FromRow)]
pub struct TopPastaRow {
    /// Frozen pasta name.
    pub nome_pasta: String,
    /// Units sold in the period.
    pub quantidade: i64,
    /// Revenue in the period.
    pub valor: f64,
}

/// Repository for pedidos and their line items.
#[derive(Debug, Clone)]
pub struct PedidoRepository {
    pool: PgPool,
}

impl PedidoRepository {
    /// Create a new pedido repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a pedido by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Pedido>> {
        sqlx::query_as::<_, Pedido>("SELECT * FROM pedidos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find pedido", e))
    }

    /// List the line items of a pedido, oldest first.
    pub async fn find_itens(&self, pedido_id: Uuid) -> AppResult<Vec<PedidoItem>> {
        sqlx::query_as::<_, PedidoItem>(
            "SELECT * FROM pedido_itens WHERE pedido_id = $1 ORDER BY created_at ASC, id ASC",
        )
        .bind(pedido_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list pedido items", e))
    }

    /// List pedidos, optionally filtered by status, newest first.
    pub async fn find_all(
        &self,
        status: Option<PedidoStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Pedido>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pedidos WHERE ($1::pedido_status IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count pedidos", e))?;

        let pedidos = sqlx::query_as::<_, Pedido>(
            "SELECT * FROM pedidos WHERE ($1::pedido_status IS NULL OR status = $1) \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list pedidos", e))?;

        Ok(PageResponse::new(
            pedidos,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List pedidos created inside a time window (for reports).
    pub async fn find_between(
        &self,
        inicio: DateTime<Utc>,
        fim: DateTime<Utc>,
    ) -> AppResult<Vec<Pedido>> {
        sqlx::query_as::<_, Pedido>(
            "SELECT * FROM pedidos WHERE created_at >= $1 AND created_at <= $2 \
             ORDER BY created_at ASC",
        )
        .bind(inicio)
        .bind(fim)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list pedidos by period", e)
        })
    }

    /// Best-selling pastas inside a time window, by units sold.
    pub async fn top_pastas(
        &self,
        inicio: DateTime<Utc>,
        fim: DateTime<Utc>,
        limit: i64,
    ) -> AppResult<Vec<TopPastaRow>> {
        sqlx::query_as::<_, TopPastaRow>(
            "SELECT i.nome_pasta, COUNT(*) AS quantidade, SUM(i.preco_unit) AS valor \
             FROM pedido_itens i \
             INNER JOIN pedidos p ON p.id = i.pedido_id \
             WHERE p.created_at >= $1 AND p.created_at <= $2 \
             GROUP BY i.nome_pasta ORDER BY quantidade DESC, valor DESC LIMIT $3",
        )
        .bind(inicio)
        .bind(fim)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rank pastas", e))
    }

    /// Create a pedido and its per-unit items as one atomic write.
    pub async fn create_com_itens(
        &self,
        data: &NovoPedido,
        itens: &[NovoPedidoItem],
    ) -> AppResult<Pedido> {
        let mut tx = self.begin().await?;

        let pedido = sqlx::query_as::<_, Pedido>(
            "INSERT INTO pedidos \
                (cliente_nome, cliente_contato, pendrive_gb, status, forma_pagamento, \
                 observacoes, total_itens, total_musicas, total_gb, total_valor, historico_status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING *",
        )
        .bind(&data.cliente_nome)
        .bind(&data.cliente_contato)
        .bind(data.pendrive_gb)
        .bind(data.status)
        .bind(data.forma_pagamento)
        .bind(&data.observacoes)
        .bind(data.totais.total_itens)
        .bind(data.totais.total_musicas)
        .bind(data.totais.total_gb)
        .bind(data.totais.total_valor)
        .bind(Json(&data.historico))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert pedido", e))?;

        insert_itens(&mut tx, pedido.id, itens).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit pedido", e))?;

        Ok(pedido)
    }

    /// Replace a pedido's item set and summary fields as one atomic write.
    pub async fn replace_itens(
        &self,
        pedido_id: Uuid,
        itens: &[NovoPedidoItem],
        totais: &PedidoTotais,
    ) -> AppResult<Pedido> {
        let mut tx = self.begin().await?;

        sqlx::query("DELETE FROM pedido_itens WHERE pedido_id = $1")
            .bind(pedido_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear pedido items", e)
            })?;

        insert_itens(&mut tx, pedido_id, itens).await?;

        let pedido = sqlx::query_as::<_, Pedido>(
            "UPDATE pedidos SET total_itens = $2, total_musicas = $3, total_gb = $4, \
                total_valor = $5, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(pedido_id)
        .bind(totais.total_itens)
        .bind(totais.total_musicas)
        .bind(totais.total_gb)
        .bind(totais.total_valor)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update pedido totals", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit item replacement", e)
        })?;

        Ok(pedido)
    }

    /// Update customer-facing fields of a pedido.
    ///
    /// `observacoes` is a two-level option: the outer level says whether
    /// the field was provided at all, the inner level is the new value
    /// (`None` clears the stored text). The COALESCE pattern cannot
    /// express "set to NULL", so this column gets an explicit
    /// provided-flag parameter.
    pub async fn update_dados(
        &self,
        id: Uuid,
        cliente_nome: Option<&str>,
        cliente_contato: Option<&str>,
        forma_pagamento: Option<musicadrive_entity::pedido::FormaPagamento>,
        observacoes: Option<Option<&str>>,
    ) -> AppResult<Option<Pedido>> {
        sqlx::query_as::<_, Pedido>(
            "UPDATE pedidos SET \
                cliente_nome = COALESCE($2, cliente_nome), \
                cliente_contato = COALESCE($3, cliente_contato), \
                forma_pagamento = COALESCE($4, forma_pagamento), \
                observacoes = CASE WHEN $5 THEN $6::text ELSE observacoes END, \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(cliente_nome)
        .bind(cliente_contato)
        .bind(forma_pagamento)
        .bind(observacoes.is_some())
        .bind(observacoes.flatten())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update pedido", e))
    }

    /// Set a pedido's status and persist the full updated history.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: PedidoStatus,
        historico: &[RegistroStatus],
    ) -> AppResult<Option<Pedido>> {
        sqlx::query_as::<_, Pedido>(
            "UPDATE pedidos SET status = $2, historico_status = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .bind(Json(historico))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update pedido status", e)
        })
    }

    /// Delete a pedido and its items. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut tx = self.begin().await?;

        sqlx::query("DELETE FROM pedido_itens WHERE pedido_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete pedido items", e)
            })?;

        let result = sqlx::query("DELETE FROM pedidos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete pedido", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit pedido deletion", e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    /// Total number of pedidos (dashboard counter).
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM pedidos")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count pedidos", e))
    }

    async fn begin(&self) -> AppResult<Transaction<'_, Postgres>> {
        self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to start transaction", e)
        })
    }
}

/// Insert per-unit item rows for a pedido inside an open transaction.
async fn insert_itens(
    tx: &mut Transaction<'_, Postgres>,
    pedido_id: Uuid,
    itens: &[NovoPedidoItem],
) -> AppResult<()> {
    for item in itens {
        sqlx::query(
            "INSERT INTO pedido_itens (pedido_id, pasta_id, nome_pasta, qtd_musicas, tamanho_gb, preco_unit) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(pedido_id)
        .bind(item.pasta_id)
        .bind(&item.nome_pasta)
        .bind(item.qtd_musicas)
        .bind(item.tamanho_gb)
        .bind(item.preco_unit)
        .execute(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert pedido item", e))?;
    }
    Ok(())
}
