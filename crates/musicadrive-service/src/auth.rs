//! Staff login and token refresh.

use std::sync::Arc;

use tracing::info;

use musicadrive_auth::jwt::encoder::{JwtEncoder, TokenPair};
use musicadrive_auth::password::PasswordHasher;
use musicadrive_core::error::AppError;
use musicadrive_database::repositories::user::UserRepository;
use musicadrive_entity::user::User;

/// Handles staff authentication against the local user table.
#[derive(Clone)]
pub struct AuthService {
    /// Staff account repository.
    user_repo: Arc<UserRepository>,
    /// Argon2id password verification.
    hasher: Arc<PasswordHasher>,
    /// JWT token creation.
    jwt_encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        jwt_encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            jwt_encoder,
        }
    }

    /// Verify credentials and issue a token pair.
    ///
    /// Inactive accounts and bad credentials both fail with the same
    /// generic message.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, TokenPair), AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid email or password"))?;

        if !user.is_active {
            return Err(AppError::authentication("Invalid email or password"));
        }

        if !self.hasher.verify_password(password, &user.password_hash)? {
            return Err(AppError::authentication("Invalid email or password"));
        }

        self.user_repo.touch_last_login(user.id).await?;

        let tokens = self
            .jwt_encoder
            .generate_token_pair(user.id, user.role, &user.name)?;

        info!(user_id = %user.id, email = %user.email, "Staff login");
        Ok((user, tokens))
    }

    /// Issue a fresh token pair for a still-active account.
    pub async fn refresh(&self, user_id: uuid::Uuid) -> Result<(User, TokenPair), AppError> {
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))?;

        if !user.is_active {
            return Err(AppError::authentication("Account is disabled"));
        }

        let tokens = self
            .jwt_encoder
            .generate_token_pair(user.id, user.role, &user.name)?;
        Ok((user, tokens))
    }
}
