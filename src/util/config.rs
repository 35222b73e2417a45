use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Language filter for the repository search query.
    #[serde(default = "default_search_language")]
    pub search_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Minimum interval between scroll samples fed to the end-of-list
    /// detector, in milliseconds.
    #[serde(default = "default_scroll_throttle_ms")]
    pub scroll_throttle_ms: u64,
    /// Distance (in rows) from the bottom of the list that counts as having
    /// reached the end.
    #[serde(default = "default_threshold_rows")]
    pub threshold_rows: u16,
    /// How long the pagination error toast stays visible, in seconds.
    #[serde(default = "default_toast_dismiss_secs")]
    pub toast_dismiss_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_descriptions: bool,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}
fn default_search_language() -> String {
    "rust".to_string()
}
fn default_scroll_throttle_ms() -> u64 {
    500
}
fn default_threshold_rows() -> u16 {
    4
}
fn default_toast_dismiss_secs() -> u64 {
    3
}
fn default_true() -> bool {
    true
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            search_language: default_search_language(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: default_scroll_throttle_ms(),
            threshold_rows: default_threshold_rows(),
            toast_dismiss_secs: default_toast_dismiss_secs(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_descriptions: true,
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: AppConfig =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            return Ok(config);
        }

        // Search candidate paths in order
        let mut candidates = Vec::new();

        // 1. ~/.config/reposcope/config.toml (standard XDG on all platforms)
        if let Some(home) = std::env::var_os("HOME") {
            candidates.push(PathBuf::from(home).join(".config/reposcope/config.toml"));
        }

        // 2. Platform-specific path from `directories` crate
        if let Some(proj_dirs) = ProjectDirs::from("", "", "reposcope") {
            candidates.push(proj_dirs.config_dir().join("config.toml"));
        }

        for config_path in &candidates {
            if config_path.exists() {
                let content = std::fs::read_to_string(config_path).with_context(|| {
                    format!("Failed to read config file: {}", config_path.display())
                })?;
                let config: AppConfig =
                    toml::from_str(&content).with_context(|| "Failed to parse config file")?;
                return Ok(config);
            }
        }

        Ok(AppConfig::default())
    }

    pub fn log_dir(&self) -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "reposcope") {
            return proj_dirs.data_dir().join("logs");
        }
        PathBuf::from(".local/share/reposcope/logs")
    }
}
