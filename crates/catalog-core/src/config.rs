//! Client configuration
//!
//! The browser build starts from the defaults and takes `CATALOG_API_BASE`
//! from the build environment when set.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Catalog backend used when nothing else is configured
pub const DEFAULT_API_BASE: &str = "https://rimes-product-management-backend.onrender.com/api";

/// How long a notice stays on screen
pub const DEFAULT_NOTICE_DURATION_MS: u32 = 2_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the REST API, without the `products` segment
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default = "default_notice_duration_ms")]
    pub notice_duration_ms: u32,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_notice_duration_ms() -> u32 {
    DEFAULT_NOTICE_DURATION_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            notice_duration_ms: default_notice_duration_ms(),
        }
    }
}

impl Config {
    /// Override the API base when a non-blank value is given.
    pub fn with_api_base(mut self, api_base: Option<&str>) -> Self {
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            self.api_base = base.trim_end_matches('/').to_string();
        }
        self
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.notice_duration_ms))
    }
}
