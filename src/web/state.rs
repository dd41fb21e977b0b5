use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::Dataset;

/// Shared state for the web server. The dataset is loaded once before the
/// server starts and never written afterwards, so a plain `Arc` is enough.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(dataset: Dataset, config: AppConfig) -> Self {
        Self {
            dataset: Arc::new(dataset),
            config: Arc::new(config),
        }
    }
}
