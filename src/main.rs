use std::sync::Arc;

use dotenvy::dotenv;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::AppConfig;
use mergington::database::{schema, ActivityStore, SqliteActivityStore};
use mergington::error::StoreError;
use mergington::services::ActivityService;
use mergington::web::build_router;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    // No traffic is served without a working store.
    let store = match connect_store(&config).await {
        Ok(store) => store,
        Err(e) => {
            error!(
                database_url = %config.database_url,
                error = %e,
                "failed to connect to activity store"
            );
            std::process::exit(1);
        }
    };
    info!(database_url = %config.database_url, "connected to activity store");

    let service = ActivityService::new(Arc::new(store));
    let app = build_router(service, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_bind_addr();
            warn!(
                addr = %config.bind_addr(),
                error = %e,
                fallback = %fallback,
                "bind failed, trying fallback"
            );
            match tokio::net::TcpListener::bind(&fallback).await {
                Ok(l) => l,
                Err(e) => {
                    error!(addr = %fallback, error = %e, "could not bind fallback port");
                    std::process::exit(1);
                }
            }
        }
    };

    match listener.local_addr() {
        Ok(addr) => info!("listening on http://{}", addr),
        Err(e) => warn!(error = %e, "could not read bound address"),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server terminated");
        std::process::exit(1);
    }
}

async fn connect_store(config: &AppConfig) -> Result<SqliteActivityStore, StoreError> {
    let pool: SqlitePool = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;
    schema::ensure_schema(&pool).await?;

    let store = SqliteActivityStore::new(pool);
    store.ping().await?;
    Ok(store)
}
