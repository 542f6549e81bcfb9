use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use todos::postgres::PgStore;
use todos::{app, InMemoryStore, SharedStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let store: SharedStore = match std::env::var("TODO_DB") {
        Ok(url) => {
            let store = PgStore::connect(&url).await?;
            store.init().await?;
            Arc::new(store)
        }
        Err(_) => {
            tracing::warn!("TODO_DB not set, falling back to in-memory store");
            Arc::new(InMemoryStore::new())
        }
    };

    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, app(store)).await?;
    Ok(())
}
