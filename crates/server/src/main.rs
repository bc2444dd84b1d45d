use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sahara_server::{config, routes, state::AppState, store};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sahara_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::load()?;
    tracing::info!(
        "Starting Sahara server on {}:{}",
        config.server.host,
        config.server.port
    );

    // Connect the document store. A failed connection is reported on the
    // /test diagnostic endpoint instead of crashing the process.
    let store: Option<Arc<dyn store::DocumentStore>> =
        match store::SqliteStore::connect(&config.store.url).await {
            Ok(store) => Some(Arc::new(store)),
            Err(e) => {
                tracing::error!("Document store unavailable at startup: {}", e);
                None
            }
        };

    // Create app state
    let state = AppState::new(store, config.clone());

    // Build router
    let app = routes::create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
