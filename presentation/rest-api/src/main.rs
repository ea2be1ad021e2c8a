use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Startup is fail-fast: a missing Firebase variable or a private key the
/// identity platform rejects aborts the process before the listener binds.
///
/// - config/: Application configuration (server, CORS, Firebase credentials)
/// - setup/: Identity platform initialization, dependency injection, server
/// - api/: Route handlers, DTOs and the bearer security scheme
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env().inspect_err(|e| {
        tracing::error!("Configuration error: {e}");
    })?;

    // 4. Initialize the identity platform and wire dependencies
    let container = DependencyContainer::new(&config.firebase)?;

    // 5. Run server
    Server::run(config, container).await?;

    Ok(())
}
