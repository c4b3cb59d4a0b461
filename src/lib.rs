pub mod api;
pub mod config;
pub mod model;
pub mod store;
pub mod web;

// Export API types
pub use api::handlers;
pub use api::routes;

// Export all model types
pub use model::*;

// Export store types
pub use store::{MemoryStore, PostgresStore, Store};

use axum::serve;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Default filter is `info`, with sqlx held at `warn`; `RUST_LOG` overrides both.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,sqlx=warn"),
    )
    .try_init();
}

/// Load configuration, connect to PostgreSQL and serve until shutdown.
///
/// Any `.env` file is loaded by the binary before this runs.
pub async fn run_server() -> anyhow::Result<()> {
    let config = crate::config::AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}, database={}:{}/{}",
        config.server_address(),
        config.database.host,
        config.database.port,
        config.database.name
    );

    log::info!("Connecting to PostgreSQL...");
    let store = Arc::new(PostgresStore::connect(&config.database).await?);

    let app = routes::create_router().with_state(store);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Catalog server running on http://{}", bind_address);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        log::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                log::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
