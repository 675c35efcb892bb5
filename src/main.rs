// src/main.rs

use std::sync::Arc;

use dotenvy::dotenv;
use quiz_desk::config::{Config, MEMORY_STORAGE};
use quiz_desk::routes;
use quiz_desk::state::AppState;
use quiz_desk::storage::{BlobStore, FsBlobStore, MemoryBlobStore, TimeoutBlobStore};
use quiz_desk::utils::credentials::AdminCredential;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env()?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let store: Arc<dyn BlobStore> = if config.storage_root == MEMORY_STORAGE {
        tracing::warn!("Using in-memory storage; quizzes and results are lost on exit");
        Arc::new(TimeoutBlobStore::new(MemoryBlobStore::new(), config.storage_timeout))
    } else {
        tracing::info!("Using filesystem storage at {}", config.storage_root);
        Arc::new(TimeoutBlobStore::new(
            FsBlobStore::new(&config.storage_root),
            config.storage_timeout,
        ))
    };

    let admin = AdminCredential::new(&config.admin_username, &config.admin_password)
        .map_err(|e| format!("Failed to hash admin password: {}", e))?;

    let state = AppState {
        store,
        config: config.clone(),
        admin: Arc::new(admin),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;

    // Start the server
    axum::serve(listener, app).await?;
    Ok(())
}
