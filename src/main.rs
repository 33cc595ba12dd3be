//! Main entry point for the application.
//!
//! This module initializes logging, loads environment variables and configuration,
//! and starts the HTTP server.

use clap::Parser;
use students_api::{api, cli, config, utils};
use tracing::{error, info, warn};

/// Main entry point that initializes and runs the application.
///
/// # Initialization steps:
/// 1. Parse CLI arguments
/// 2. Initialize logging system
/// 3. Load environment variables
/// 4. Resolve configuration
/// 5. Serve the API until shutdown
#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    utils::init_logging(&cli.logging_level, cli.log_to_file);

    if let Err(e) = dotenvy::dotenv() {
        warn!("Failed to load .env file: {}", e);
    }

    let mut config = match config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    info!("Starting API server on port {}", config.server.port);
    if let Err(e) = api::server::launch_server(config).await {
        error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}
