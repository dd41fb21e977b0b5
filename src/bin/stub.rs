//! Minimal standalone API app. It shares no routes and no state with the
//! dashboard binary; the two are separately invocable surfaces.

use anyhow::{Context, Result};
use askama::Template;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};

const BIND: &str = "0.0.0.0:5000";

#[derive(Template)]
#[template(path = "stub.html")]
struct StubTemplate;

/// `GET /` — renders the page template with no data bound.
async fn index() -> Html<String> {
    Html(StubTemplate.render().unwrap_or_default())
}

/// `GET /api/data` — fixed JSON payload.
async fn api_data() -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "Data berhasil diambil dari API",
    }))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index))
        .route("/api/data", get(api_data))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(BIND)
        .await
        .with_context(|| format!("failed to bind {BIND}"))?;
    tracing::info!(bind = BIND, "api stub listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
