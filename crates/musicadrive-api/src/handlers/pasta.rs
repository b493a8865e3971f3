//! Pasta catalog handlers.
//!
//! Listing active pastas is public (the storefront); everything else
//! requires staff auth.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use musicadrive_core::types::pagination::PageResponse;
use musicadrive_entity::pasta::{CreatePasta, Pasta, UpdatePasta};

use crate::dto::request::SetActiveRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, Pagination};
use crate::state::AppState;

/// GET /api/pastas — public storefront catalog (active only).
pub async fn list_storefront(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Pasta>>>, ApiError> {
    let pastas = state.catalogo_service.list_storefront().await?;
    Ok(Json(ApiResponse::ok(pastas)))
}

/// GET /api/admin/pastas — full catalog for the backoffice.
pub async fn list_all(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(pagination): Query<Pagination>,
) -> Result<Json<ApiResponse<PageResponse<Pasta>>>, ApiError> {
    let page = state
        .catalogo_service
        .list_all(auth.context(), pagination.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/admin/pastas/{id}
pub async fn get_pasta(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Pasta>>, ApiError> {
    let pasta = state.catalogo_service.get(id).await?;
    Ok(Json(ApiResponse::ok(pasta)))
}

/// POST /api/admin/pastas
pub async fn create_pasta(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePasta>,
) -> Result<Json<ApiResponse<Pasta>>, ApiError> {
    let pasta = state.catalogo_service.create(auth.context(), req).await?;
    Ok(Json(ApiResponse::ok(pasta)))
}

/// PUT /api/admin/pastas/{id}
pub async fn update_pasta(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePasta>,
) -> Result<Json<ApiResponse<Pasta>>, ApiError> {
    let pasta = state
        .catalogo_service
        .update(auth.context(), id, req)
        .await?;
    Ok(Json(ApiResponse::ok(pasta)))
}

/// PUT /api/admin/pastas/{id}/active
pub async fn set_active(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<SetActiveRequest>,
) -> Result<Json<ApiResponse<Pasta>>, ApiError> {
    let pasta = state
        .catalogo_service
        .set_active(auth.context(), id, req.is_active)
        .await?;
    Ok(Json(ApiResponse::ok(pasta)))
}

/// DELETE /api/admin/pastas/{id}
pub async fn delete_pasta(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.catalogo_service.delete(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Pasta deleted"))))
}
