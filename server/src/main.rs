//! HTTP server binary: loads settings, connects to Postgres, runs the
//! pending migrations, and serves the portal API.

mod error;
mod extract;
mod middleware;
mod routes;
mod settings;
mod state;
mod uploads;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api::Store;

use crate::settings::Settings;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = Settings::new().context("failed to load settings")?;

    let store = Store::connect(&settings.database.url())
        .await
        .context("failed to connect to the database")?;
    store.migrate().await.context("failed to run migrations")?;
    store.healthcheck().await.context("database healthcheck failed")?;

    let uploads_dir = std::path::PathBuf::from(&settings.uploads.dir);
    uploads::ensure_dir(&uploads_dir)
        .await
        .context("failed to create uploads directory")?;

    let state = AppState {
        store: store.clone(),
        jwt_secret: settings.auth.secret.clone(),
        token_ttl_hours: settings.auth.ttl,
        uploads_dir,
    };

    let addr = format!("{}:{}", settings.http.host, settings.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "listening");

    axum::serve(listener, routes::router(state)).await?;

    store.close().await;
    Ok(())
}
