use anyhow::Context;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::{self, ApiState};
use crate::config::GolfWeatherConfig;

/// Full application router, API nested under `/api`
pub fn app(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new().nest("/api", api::router(state)).layer(cors)
}

pub async fn run(config: &GolfWeatherConfig, port: u16) -> anyhow::Result<()> {
    let app = app(ApiState::from_config(config)?);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Web server running at http://localhost:{}", port);
    axum::serve(listener, app).await.context("Web server failed")?;
    Ok(())
}
