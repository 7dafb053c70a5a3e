// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, is_config_operation};
use commands::{
    handle_config_update_command, handle_list_config_command, handle_list_leagues_command,
    handle_standings_command, handle_version_command, validate_args,
};
use manxhive_football::config::Config;
use manxhive_football::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Validate argument combinations
    validate_args(&args)?;

    // Handle version flag first
    if args.version {
        return handle_version_command();
    }

    // Config updates must work even when the stored config is broken
    let config = if is_config_operation(&args) || args.list_config {
        Config::load().await.unwrap_or_default()
    } else {
        Config::load().await?
    };

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (log_file_path, _guard) =
        logging::setup_logging(&args, config.log_file_path.as_deref()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    if args.list_leagues {
        return handle_list_leagues_command(&args, &config).await;
    }

    handle_standings_command(&args, &config).await
}
