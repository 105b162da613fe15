//! PawsConnect server: connects to PostgreSQL, initializes the schema, then serves the API and the static site.
//!
//! Run from repo root: `cargo run -p pawsconnect-server`

use pawsconnect::{app, ensure_database_exists, initialize, AppState, Config, PgStore};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pawsconnect=info,tower_http=info")),
        )
        .init();

    let options = config.connect_options()?;
    ensure_database_exists(&options).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;
    tracing::info!("connected to database");

    let store = Arc::new(PgStore::new(pool));
    initialize(store.as_ref()).await?;

    let state = AppState::new(store);
    let router = app(state, &config.static_dir);
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
