//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use musicadrive_core::error::{AppError, ErrorKind};

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Reset database (drop all tables and re-run)
    Reset {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            musicadrive_database::migration::run_migrations(&pool).await?;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::Reset { force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt("This will DROP all tables and re-run migrations. Continue?")
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            println!("Resetting database...");
            sqlx::query("DROP SCHEMA public CASCADE")
                .execute(&pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to drop schema", e)
                })?;
            sqlx::query("CREATE SCHEMA public")
                .execute(&pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to recreate schema", e)
                })?;

            musicadrive_database::migration::run_migrations(&pool).await?;
            output::print_success("Database reset complete.");
        }
    }

    Ok(())
}
