use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::web::handlers::get_dashboard;
use crate::web::state::AppState;

/// Start the dashboard server; runs until the process is stopped.
pub async fn start_web_server(state: AppState, bind: &str) -> Result<()> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(get_dashboard))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!(%bind, "dashboard listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
