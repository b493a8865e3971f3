//! Staff account management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use musicadrive_core::error::AppError;
use musicadrive_database::repositories::user::UserRepository;
use musicadrive_entity::user::UpdateUser;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all staff accounts
    List,
    /// Enable an account
    Enable {
        /// Login email
        email: String,
    },
    /// Disable an account
    Disable {
        /// Login email
        email: String,
    },
}

/// Staff display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Display name
    name: String,
    /// Login email
    email: String,
    /// Role
    role: String,
    /// Active flag
    active: bool,
    /// Last login
    last_login: String,
}

/// Execute user commands
pub async fn execute(args: &UserArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;
    let user_repo = UserRepository::new(pool.clone());

    match &args.command {
        UserCommand::List => {
            let users = user_repo.find_all().await?;
            let rows: Vec<UserRow> = users
                .iter()
                .map(|u| UserRow {
                    id: u.id.to_string(),
                    name: u.name.clone(),
                    email: u.email.clone(),
                    role: u.role.to_string(),
                    active: u.is_active,
                    last_login: u
                        .last_login_at
                        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_else(|| "never".to_string()),
                })
                .collect();
            output::print_list(&rows, format);
        }
        UserCommand::Enable { email } => {
            set_active(&user_repo, email, true).await?;
            output::print_success(&format!("Account '{email}' enabled"));
        }
        UserCommand::Disable { email } => {
            set_active(&user_repo, email, false).await?;
            output::print_warning(&format!("Account '{email}' disabled"));
        }
    }

    Ok(())
}

async fn set_active(repo: &UserRepository, email: &str, is_active: bool) -> Result<(), AppError> {
    let user = repo
        .find_by_email(email)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Account '{email}' not found")))?;

    repo.update(
        user.id,
        &UpdateUser {
            is_active: Some(is_active),
            ..Default::default()
        },
    )
    .await?;
    Ok(())
}
