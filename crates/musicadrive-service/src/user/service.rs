//! Staff account use cases. All operations are admin-gated.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use musicadrive_auth::password::PasswordHasher;
use musicadrive_core::error::AppError;
use musicadrive_database::repositories::user::UserRepository;
use musicadrive_entity::user::{CreateUser, UpdateUser, User, UserRole};

use crate::context::RequestContext;

/// Plain-text request to create a staff account. The password is hashed
/// before it reaches the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserRequest {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Plain-text password, hashed on creation.
    pub password: String,
    /// Backoffice role.
    pub role: UserRole,
}

/// Manages staff accounts.
#[derive(Clone)]
pub struct UserService {
    /// Staff account repository.
    user_repo: Arc<UserRepository>,
    /// Argon2id password hashing.
    hasher: Arc<PasswordHasher>,
    /// Minimum accepted password length.
    password_min_length: usize,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        password_min_length: usize,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            password_min_length,
        }
    }

    /// Lists all staff accounts.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<User>, AppError> {
        self.exigir_admin(ctx)?;
        self.user_repo.find_all().await
    }

    /// Gets a staff account by ID.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<User, AppError> {
        self.exigir_admin(ctx)?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Creates a staff account with a hashed password.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: NewUserRequest,
    ) -> Result<User, AppError> {
        self.exigir_admin(ctx)?;

        if data.name.trim().is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }
        if !data.email.contains('@') {
            return Err(AppError::validation("Invalid email address"));
        }
        self.validar_senha(&data.password)?;

        if self.user_repo.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict("Email is already in use"));
        }

        let password_hash = self.hasher.hash_password(&data.password)?;
        let user = self
            .user_repo
            .create(&CreateUser {
                name: data.name.trim().to_string(),
                email: data.email.trim().to_lowercase(),
                password_hash,
                role: data.role,
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, role = %user.role, actor = %ctx.name, "Staff account created");
        Ok(user)
    }

    /// Updates a staff account's profile fields.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateUser,
    ) -> Result<User, AppError> {
        self.exigir_admin(ctx)?;

        if let Some(email) = &data.email {
            if !email.contains('@') {
                return Err(AppError::validation("Invalid email address"));
            }
            if let Some(existing) = self.user_repo.find_by_email(email).await? {
                if existing.id != id {
                    return Err(AppError::conflict("Email is already in use"));
                }
            }
        }

        let user = self
            .user_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        info!(user_id = %id, actor = %ctx.name, "Staff account updated");
        Ok(user)
    }

    /// Replaces a staff account's password.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        password: &str,
    ) -> Result<(), AppError> {
        // Admins may reset anyone; staff may change their own.
        if !ctx.is_admin() && ctx.user_id != id {
            return Err(AppError::authorization(
                "Only admins may change other accounts' passwords",
            ));
        }
        self.validar_senha(password)?;

        self.get_unchecked(id).await?;
        let hash = self.hasher.hash_password(password)?;
        self.user_repo.update_password(id, &hash).await?;

        info!(user_id = %id, actor = %ctx.name, "Password changed");
        Ok(())
    }

    /// Enables or disables a staff account.
    ///
    /// Admins cannot disable their own account, so the system always keeps
    /// at least one usable admin login.
    pub async fn set_active(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        is_active: bool,
    ) -> Result<User, AppError> {
        self.exigir_admin(ctx)?;

        if !is_active && ctx.user_id == id {
            return Err(AppError::validation("You cannot disable your own account"));
        }

        let data = UpdateUser {
            is_active: Some(is_active),
            ..Default::default()
        };
        let user = self
            .user_repo
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        info!(user_id = %id, is_active, actor = %ctx.name, "Staff account visibility changed");
        Ok(user)
    }

    async fn get_unchecked(&self, id: Uuid) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    fn exigir_admin(&self, ctx: &RequestContext) -> Result<(), AppError> {
        if !ctx.is_admin() {
            return Err(AppError::authorization(
                "Admin role required for account management",
            ));
        }
        Ok(())
    }

    fn validar_senha(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }
        Ok(())
    }
}
