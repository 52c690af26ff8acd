pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod store;

// Export API types
pub use api::handlers;
pub use api::routes;
pub use api::{AppState, SharedState};

// Export the query pipeline
pub use logic::{execute_query, paginate, resolve_params, PaginationError};

// Export all model types
pub use model::*;

// Export store types
pub use store::{load_master_dataset, load_or_empty, LoadError};

/// Build the full application router over an already loaded dataset
pub fn build_app(dataset: MasterDataset) -> axum::Router {
    use std::sync::Arc;

    api::routes::create_router().with_state(Arc::new(AppState::new(dataset)))
}

/// Serve `app` on `listener` until the process is stopped
pub async fn serve_app(listener: tokio::net::TcpListener, app: axum::Router) -> anyhow::Result<()> {
    axum::serve(listener, app).await?;
    Ok(())
}

/// Load configuration and data, then run the server
pub async fn run_server() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Initialize logging with INFO level unless RUST_LOG says otherwise
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();

    let config = crate::config::AppConfig::load()?;
    log::info!(
        "Configuration loaded: server={}:{} data={}",
        config.server.host,
        config.server.port,
        config.data.directory.display()
    );

    // A failed load still starts the server, with every collection empty
    let dataset = load_or_empty(&config.data.directory);

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Cloud catalog running on http://{}", bind_address);

    serve_app(listener, build_app(dataset)).await
}
