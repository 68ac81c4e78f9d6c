//! Favorites indexer configuration.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct IndexerConfig {
    /// Base URL of the indexer REST API.
    pub base_url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    5_000
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000".into(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
