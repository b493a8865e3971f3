//! Reporting handlers. Staff-only.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use musicadrive_database::repositories::pedido::TopPastaRow;
use musicadrive_service::relatorio::RelatorioVendas;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Date window for a report.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodoQuery {
    /// Window start (inclusive, RFC 3339).
    pub inicio: DateTime<Utc>,
    /// Window end (inclusive, RFC 3339).
    pub fim: DateTime<Utc>,
    /// Ranking size for the top-pastas report.
    pub limit: Option<i64>,
}

/// GET /api/admin/relatorios/vendas
pub async fn vendas(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(periodo): Query<PeriodoQuery>,
) -> Result<Json<ApiResponse<RelatorioVendas>>, ApiError> {
    let relatorio = state
        .relatorio_service
        .vendas(auth.context(), periodo.inicio, periodo.fim)
        .await?;
    Ok(Json(ApiResponse::ok(relatorio)))
}

/// GET /api/admin/relatorios/top-pastas
pub async fn top_pastas(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(periodo): Query<PeriodoQuery>,
) -> Result<Json<ApiResponse<Vec<TopPastaRow>>>, ApiError> {
    let ranking = state
        .relatorio_service
        .top_pastas(auth.context(), periodo.inicio, periodo.fim, periodo.limit)
        .await?;
    Ok(Json(ApiResponse::ok(ranking)))
}

/// GET /api/admin/relatorios/export — CSV download.
pub async fn export_csv(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(periodo): Query<PeriodoQuery>,
) -> Result<Response, ApiError> {
    let csv = state
        .relatorio_service
        .exportar_csv(auth.context(), periodo.inicio, periodo.fim)
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"pedidos.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
