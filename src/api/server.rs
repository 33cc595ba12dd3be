use crate::api::context::AppContext;
use crate::api::routes;
use crate::config::AppConfig;
use crate::db::Database;
use crate::remote::RemoteFunction;
use tokio::net::TcpListener;
use tracing::info;

/// Builds the application context described by `config`
///
/// Opens the connection pool, creates the `students` table if needed, and
/// prepares the remote function client.
pub fn build_context(config: &AppConfig) -> Result<AppContext, Box<dyn std::error::Error>> {
    let database = Database::new(&config.database)?;
    database.ensure_schema()?;
    let remote = RemoteFunction::new(&config.remote)?;
    Ok(AppContext::new(database, remote))
}

/// Starts and runs the HTTP server until Ctrl+C is received
///
/// # Arguments
/// * `config` - Fully resolved startup configuration
///
/// # Returns
/// * `Result<(), Box<dyn std::error::Error>>` - Ok after a graceful shutdown, Error if startup fails
///
/// # Example
/// ```no_run
/// use students_api::{api::server, config::AppConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     server::launch_server(AppConfig::default()).await
/// }
/// ```
pub async fn launch_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let context = build_context(&config)?;
    let app = routes::app(context);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
