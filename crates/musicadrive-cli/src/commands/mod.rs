//! CLI command definitions and dispatch.

pub mod admin;
pub mod migrate;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use musicadrive_core::config::AppConfig;
use musicadrive_core::error::AppError;

/// MusicaDrive — curated music folder storefront
#[derive(Debug, Parser)]
#[command(name = "musicadrive", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (reads config/default.toml + config/<env>.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the MusicaDrive server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Admin account bootstrap
    Admin(admin::AdminArgs),
    /// Staff account management
    User(user::UserArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::Migrate(args) => migrate::execute(args, &self.env).await,
            Commands::Admin(args) => admin::execute(args, &self.env).await,
            Commands::User(args) => user::execute(args, &self.env, self.format).await,
        }
    }
}

/// Helper: load configuration for the selected environment
pub fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: create a database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<sqlx::PgPool, AppError> {
    let pool = musicadrive_database::connection::DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
