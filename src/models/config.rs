//! Configuration model loaded from external sources.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

fn default_timeout_secs() -> u64 {
    30
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("clinic-dashboard.json")
}

fn default_items_per_page() -> usize {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Settings for the dashboard client.
pub struct DashboardConfig {
    /// Backend root, e.g. `http://localhost:8000`.
    pub api_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// JSON file backing the local store.
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

impl DashboardConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Page size, never zero.
    pub fn page_size(&self) -> usize {
        self.items_per_page.max(1)
    }
}
