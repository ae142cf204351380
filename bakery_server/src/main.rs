//! Bakery API server.
//!
//! Run from repo root: `cargo run -p bakery-server`
//! Configuration comes from the environment (or a `.env` file): `DATABASE_URL`, `BIND_ADDR`,
//! `DATABASE_MAX_CONNECTIONS`, `BODY_LIMIT_BYTES`, `SEED_DATABASE`.

use bakery_api::{app, apply_migrations, connect, seed_database, AppState, Config};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("bakery_api=info,tower_http=info")
            }),
        )
        .init();

    let config = Config::from_env()?;
    let pool = connect(&config).await?;
    apply_migrations(&pool).await?;
    if config.seed_database {
        seed_database(&pool).await?;
    }

    let app = app(AppState::new(pool), &config);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
