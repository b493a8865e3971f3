//! Pedido handlers.
//!
//! Checkout is the single public write endpoint; pedido management is
//! staff-only.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use musicadrive_core::error::AppError;
use musicadrive_core::types::pagination::PageResponse;
use musicadrive_entity::pedido::{ItemPedidoRequest, Pedido, PedidoStatus};
use musicadrive_service::pedido::{PedidoDetalhes, UpdatePedidoDados};

use crate::dto::request::{CheckoutRequest, EditItensRequest, StatusUpdateRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, Pagination};
use crate::state::AppState;

/// Query parameters for the pedido list.
#[derive(Debug, Clone, Deserialize)]
pub struct PedidoListQuery {
    /// Filter by status.
    pub status: Option<PedidoStatus>,
    /// Page number.
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    25
}

/// POST /api/pedidos — public storefront checkout.
pub async fn checkout(
    State(state): State<AppState>,
    Json(req): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Pedido>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let pedido = state.pedido_service.criar(req.into_create()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(pedido))))
}

/// GET /api/admin/pedidos
pub async fn list_pedidos(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<PedidoListQuery>,
) -> Result<Json<ApiResponse<PageResponse<Pedido>>>, ApiError> {
    let pagination = Pagination {
        page: query.page,
        per_page: query.per_page,
    };
    let page = state
        .pedido_service
        .list(auth.context(), query.status, pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/admin/pedidos/{id}
pub async fn get_pedido(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<PedidoDetalhes>>, ApiError> {
    let detalhes = state.pedido_service.get(id).await?;
    Ok(Json(ApiResponse::ok(detalhes)))
}

/// PUT /api/admin/pedidos/{id}
pub async fn update_pedido(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePedidoDados>,
) -> Result<Json<ApiResponse<Pedido>>, ApiError> {
    let pedido = state
        .pedido_service
        .update_dados(auth.context(), id, req)
        .await?;
    Ok(Json(ApiResponse::ok(pedido)))
}

/// PUT /api/admin/pedidos/{id}/itens
pub async fn edit_itens(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<EditItensRequest>,
) -> Result<Json<ApiResponse<PedidoDetalhes>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let itens: Vec<ItemPedidoRequest> = req
        .itens
        .into_iter()
        .map(|i| ItemPedidoRequest {
            pasta_id: i.pasta_id,
            quantidade: i.quantidade,
        })
        .collect();

    let detalhes = state
        .pedido_service
        .editar_itens(auth.context(), id, itens)
        .await?;
    Ok(Json(ApiResponse::ok(detalhes)))
}

/// PUT /api/admin/pedidos/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<StatusUpdateRequest>,
) -> Result<Json<ApiResponse<Pedido>>, ApiError> {
    let pedido = state
        .pedido_service
        .atualizar_status(auth.context(), id, req.status)
        .await?;
    Ok(Json(ApiResponse::ok(pedido)))
}

/// DELETE /api/admin/pedidos/{id}
pub async fn delete_pedido(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.pedido_service.excluir(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Pedido deleted"))))
}

/// GET /api/admin/pedidos/{id}/print — printable HTML receipt.
pub async fn print_pedido(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, ApiError> {
    let html = state.pedido_service.recibo(id).await?;
    Ok(Html(html))
}
