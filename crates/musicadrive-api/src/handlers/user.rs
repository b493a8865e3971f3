//! Staff account handlers. Admin-only, enforced by the `AdminUser`
//! extractor and again inside the service.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use musicadrive_core::error::AppError;
use musicadrive_entity::user::UpdateUser;
use musicadrive_service::user::NewUserRequest;

use crate::dto::request::{ChangePasswordRequest, CreateUserRequest, SetActiveRequest};
use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AdminUser, AuthUser};
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AdminUser,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, ApiError> {
    let users = state.user_service.list(&auth.0).await?;
    Ok(Json(ApiResponse::ok(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// POST /api/admin/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AdminUser,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let user = state
        .user_service
        .create(
            &auth.0,
            NewUserRequest {
                name: req.name,
                email: req.email,
                password: req.password,
                role: req.role,
            },
        )
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/admin/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    auth: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUser>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.update(&auth.0, id, req).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/admin/users/{id}/active
pub async fn set_active(
    State(state): State<AppState>,
    auth: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<SetActiveRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .user_service
        .set_active(&auth.0, id, req.is_active)
        .await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/users/me/password — staff change their own password.
pub async fn change_own_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .user_service
        .change_password(auth.context(), auth.user_id, &req.password)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Password changed",
    ))))
}

/// PUT /api/admin/users/{id}/password — admin resets any password.
pub async fn reset_password(
    State(state): State<AppState>,
    auth: AdminUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .user_service
        .change_password(&auth.0, id, &req.password)
        .await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Password reset",
    ))))
}
