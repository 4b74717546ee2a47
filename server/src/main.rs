//! Backend application: reads configuration, eagerly constructs the one
//! shared database client, mounts routes, serves HTTP, and closes the
//! client on shutdown.

use axum::Router;
use shared_db::{
    common_routes, ensure_database_exists, ensure_schema, user_routes, AppConfig, AppState, Db,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("api_server=info,shared_db=info")),
        )
        .init();

    // Configuration is read once; a missing DATABASE_URL aborts startup
    // before anything is served.
    let config = AppConfig::from_env()?;

    ensure_database_exists(&config.database_url).await?;
    let db = Db::connect(&config.database_url, config.db_max_connections).await?;
    ensure_schema(db.pool()).await?;

    let state = AppState { db: db.clone() };
    let app = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/v1", user_routes(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("database client closed, exiting");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
