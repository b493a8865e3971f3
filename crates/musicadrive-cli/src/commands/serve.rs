//! Server start command.

use clap::Args;

use musicadrive_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the configured HTTP port
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, env: &str) -> Result<(), AppError> {
    let mut config = super::load_config(env)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let pool = super::create_db_pool(&config).await?;
    musicadrive_database::migration::run_migrations(&pool).await?;

    musicadrive_api::run_server(config, pool).await
}
