// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Backend connection section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Document list section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentsConfig {
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        DocumentsConfig {
            confirm_delete: true,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub documents: DocumentsConfig,
}

impl Config {
    /// Apply a command-line base URL override
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.api.base_url = url;
        }
        self
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
