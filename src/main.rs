//! # Drivent Hotels
//!
//! Application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Database connection pool
//! - HTTP server

use anyhow::Result;
use tracing::info;

use drivent_hotels::config::Settings;
use drivent_hotels::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    drivent_hotels::telemetry::init_tracing();

    info!("Starting hotel API...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
