use clap::Parser;
use resource_feed::config::{ConfigError, ServerConfig};
use resource_feed::graphql::build_schema;
use resource_feed::lifecycle::{setup_tracing, ResourceSystem};
use resource_feed::resource_actor::ResourceError;
use resource_feed::server::{self, ServerError};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] ResourceError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("{0}")]
    Shutdown(String),
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = ServerConfig::parse();
    setup_tracing();

    config.validate()?;
    let seed = config.load_seed()?;

    info!(
        addr = %config.addr(),
        path = %config.path,
        event_capacity = config.event_capacity,
        "Starting resource feed"
    );

    let system = ResourceSystem::start(config.store_settings(), seed)?;
    let schema = build_schema(system.services());
    let router = server::router(schema, &config.path, system.query(), system.subscription());

    let served = server::serve(config.addr(), &config.path, router).await;

    // Open WebSocket sessions keep store clients alive until their peers disconnect.
    match tokio::time::timeout(SHUTDOWN_GRACE, system.shutdown()).await {
        Ok(result) => result.map_err(AppError::Shutdown)?,
        Err(_) => warn!(grace = ?SHUTDOWN_GRACE, "Store still referenced by open sessions; exiting"),
    }
    served?;

    info!("Server stopped");
    Ok(())
}
