//! Categoria handlers. Listing is public; mutation is staff-only.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use musicadrive_entity::categoria::{Categoria, CreateCategoria, UpdateCategoria};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/categorias
pub async fn list_categorias(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Categoria>>>, ApiError> {
    let categorias = state.categoria_service.list().await?;
    Ok(Json(ApiResponse::ok(categorias)))
}

/// POST /api/admin/categorias
pub async fn create_categoria(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateCategoria>,
) -> Result<Json<ApiResponse<Categoria>>, ApiError> {
    let categoria = state.categoria_service.create(auth.context(), req).await?;
    Ok(Json(ApiResponse::ok(categoria)))
}

/// PUT /api/admin/categorias/{id}
pub async fn update_categoria(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateCategoria>,
) -> Result<Json<ApiResponse<Categoria>>, ApiError> {
    let categoria = state
        .categoria_service
        .update(auth.context(), id, req)
        .await?;
    Ok(Json(ApiResponse::ok(categoria)))
}

/// DELETE /api/admin/categorias/{id}
pub async fn delete_categoria(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.categoria_service.delete(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Categoria deleted",
    ))))
}
