use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::{domain::Movie, error::ApiError};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod catalog;
mod config;

use api::{film_route, lookup_film};
use app_state::AppState;
use catalog::SwapiCatalog;
use config::load_settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    let catalog = SwapiCatalog::new(&settings.swapi_url, settings.upstream_timeout())
        .context("failed to build catalog client")?;
    info!(films_url = catalog.films_url(), "catalog configured");

    match &settings.static_dir {
        Some(dir) => info!(static_dir = %dir, "serving static files"),
        None => info!("static file serving disabled"),
    }

    let state = AppState {
        catalog: Arc::new(catalog),
        static_dir: settings.static_dir.map(Into::into),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/healthz", get(healthz))
        .route(film_route(), get(http_get_film));
    // Directory requests resolve to their index.html.
    if let Some(dir) = &state.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }
    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_get_film(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, (StatusCode, Json<ApiError>)> {
    lookup_film(state.catalog.as_ref(), &id)
        .await
        .map(Json)
        .map_err(|err| (err.status_code(), Json(ApiError::from(&err))))
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
