//! Admin account bootstrap commands.

use clap::{Args, Subcommand};
use sqlx::PgPool;

use musicadrive_auth::password::PasswordHasher;
use musicadrive_core::error::AppError;
use musicadrive_database::repositories::user::UserRepository;
use musicadrive_entity::user::{CreateUser, UserRole};

use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a new admin account
    Create {
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// Login email
        #[arg(short, long)]
        email: Option<String>,
        /// Password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Reset an account's password
    ResetPassword {
        /// Login email of the account
        #[arg(short, long)]
        email: String,
        /// New password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool: PgPool = super::create_db_pool(&config).await?;
    let user_repo = UserRepository::new(pool.clone());
    let hasher = PasswordHasher::new();

    match &args.command {
        AdminCommand::Create {
            name,
            email,
            password,
        } => {
            let name = match name {
                Some(n) => n.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin name")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let email: String = match email {
                Some(e) => e.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Admin email")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let password = prompt_password(password, "Admin password")?;
            if password.len() < config.auth.password_min_length {
                return Err(AppError::validation(format!(
                    "Password must be at least {} characters",
                    config.auth.password_min_length
                )));
            }

            let password_hash = hasher.hash_password(&password)?;

            let user = user_repo
                .create(&CreateUser {
                    name: name.clone(),
                    email: email.trim().to_lowercase(),
                    password_hash,
                    role: UserRole::Admin,
                })
                .await?;

            output::print_success(&format!("Admin '{}' created (id: {})", name, user.id));
        }
        AdminCommand::ResetPassword { email, password } => {
            let user = user_repo
                .find_by_email(email)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Account '{email}' not found")))?;

            let password = prompt_password(password, "New password")?;
            let password_hash = hasher.hash_password(&password)?;

            user_repo.update_password(user.id, &password_hash).await?;

            output::print_success(&format!("Password reset for '{email}'"));
        }
    }

    Ok(())
}

fn prompt_password(given: &Option<String>, prompt: &str) -> Result<String, AppError> {
    match given {
        Some(p) => Ok(p.clone()),
        None => dialoguer::Password::new()
            .with_prompt(prompt)
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}"))),
    }
}
