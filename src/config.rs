use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::Thresholds;

const CONFIG_FILE: &str = "dashboard_config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub server: ServerConfig,
    pub charts: ChartsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// CSV file read once at startup.
    pub csv_path: String,
    pub medium_threshold: u64,
    pub high_threshold: u64,
    /// How many regions the ranking keeps.
    pub top_n: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartsConfig {
    pub bar_width: u32,
    pub bar_height: u32,
    pub line_width: u32,
    pub line_height: u32,
    pub pie_width: u32,
    pub pie_height: u32,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            csv_path: "data_diabetes.csv".into(),
            medium_threshold: 50_000,
            high_threshold: 100_000,
            top_n: 10,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".into(),
        }
    }
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            bar_width: 1000,
            bar_height: 600,
            line_width: 1000,
            line_height: 500,
            pie_width: 600,
            pie_height: 600,
        }
    }
}

impl AppConfig {
    /// Load from the given path, or from `dashboard_config.toml` next to the
    /// binary. A missing default file is created with default contents; a
    /// missing explicit path is an error.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                Ok(toml::from_str(&content)?)
            }
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.exists() {
                    let content = fs::read_to_string(path)?;
                    Ok(toml::from_str(&content)?)
                } else {
                    let config = Self::default();
                    let content = toml::to_string_pretty(&config)?;
                    fs::write(path, content)?;
                    Ok(config)
                }
            }
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds {
            medium: self.data.medium_threshold,
            high: self.data.high_threshold,
        }
    }
}

impl ChartsConfig {
    pub fn bar_size(&self) -> (u32, u32) {
        (self.bar_width, self.bar_height)
    }

    pub fn line_size(&self) -> (u32, u32) {
        (self.line_width, self.line_height)
    }

    pub fn pie_size(&self) -> (u32, u32) {
        (self.pie_width, self.pie_height)
    }
}
