//! Eunoia - A state-managed HTTP server for a personal wellness companion
//!
//! This is the main entry point for the eunoia application.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use eunoia::{
    api::create_router, config::Config, journal::JournalStore, state::AppState,
    tasks::completion_watcher_task, utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("eunoia={},tower_http=info", config.log_level()))
        .init();

    info!("Starting eunoia server v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration: host={}, port={}, data_dir={}",
        config.host,
        config.port,
        config.data_dir().display()
    );

    // Open the local journal store (required before serving requests)
    let journal = match JournalStore::load(config.data_dir()) {
        Ok(store) => {
            info!("Journal loaded with {} entries", store.len());
            store
        }
        Err(e) => {
            tracing::error!("Failed to open journal storage: {}", e);
            std::process::exit(1);
        }
    };

    // Create application state
    let state = Arc::new(AppState::new(config.port, config.host.clone(), journal));

    // Start the completion watcher background task
    let watcher_state = Arc::clone(&state);
    tokio::spawn(async move {
        completion_watcher_task(watcher_state).await;
    });

    // Create HTTP router with all endpoints
    let app = create_router(state);

    // Bind to the specified address
    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /timers/:kind/configure - Set a countdown duration");
    info!("  POST /timers/:kind/start     - Begin or resume a countdown");
    info!("  POST /timers/:kind/pause     - Pause a countdown");
    info!("  POST /timers/:kind/reset     - Reset a countdown");
    info!("  POST /timers/detox/stop      - End a detox session early");
    info!("  GET  /journal                - List journal entries");
    info!("  POST /journal                - Save a journal entry");
    info!("  GET  /activities/suggestion  - Draw an activity suggestion");
    info!("  POST /moods/:mood/play       - Play sounds for a mood");
    info!("  GET  /status                 - Check current status and timers");
    info!("  GET  /health                 - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
