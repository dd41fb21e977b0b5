mod analytics;
mod charts;
mod config;
mod loader;
mod models;
mod util;
mod web;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use loader::load_dataset;
use web::server::start_web_server;
use web::state::AppState;

#[derive(Parser)]
#[command(
    name = "dm-dashboard",
    version,
    about = "Web dashboard for regional diabetes case statistics"
)]
struct Cli {
    /// Config file path (defaults to dashboard_config.toml, created on first run)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// CSV data file, overrides the configured path
    #[arg(short, long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Listen address, overrides the configured one
    #[arg(short, long, value_name = "ADDR")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_from(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data.csv_path = data.display().to_string();
    }
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }

    // One-shot load, outside the request path. Requests only ever read it.
    let thresholds = config.thresholds();
    let dataset = load_dataset(Path::new(&config.data.csv_path), &thresholds)?;
    tracing::info!(rows = dataset.len(), path = %config.data.csv_path, "dataset loaded");

    let bind = config.server.bind.clone();
    let state = AppState::new(dataset, config);
    start_web_server(state, &bind).await
}
