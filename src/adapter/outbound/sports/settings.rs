//! Sports statistics API configuration.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::Sport;

/// Settings for [`SportsApiClient`](super::SportsApiClient).
#[derive(Debug, Clone, Deserialize)]
pub struct SportsApiConfig {
    /// API key, loaded from `SPORTS_API_KEY` (never from the config file).
    #[serde(skip)]
    pub api_key: Option<String>,
    /// Per-sport base URL overrides, keyed by sport slug.
    #[serde(default)]
    pub hosts: BTreeMap<String, String>,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Attempts per request, including the first.
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Fixed delay between attempts in milliseconds.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    3_000
}

const fn default_retry_max_attempts() -> u32 {
    3
}

const fn default_retry_backoff_ms() -> u64 {
    250
}

impl Default for SportsApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            hosts: BTreeMap::new(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

impl SportsApiConfig {
    /// Base URL for `sport`, honoring overrides.
    #[must_use]
    pub fn host(&self, sport: Sport) -> String {
        if let Some(host) = self.hosts.get(sport.slug()) {
            return host.trim_end_matches('/').to_string();
        }
        match sport {
            Sport::Football => "https://v3.football.api-sports.io".into(),
            other => format!("https://v1.{}.api-sports.io", other.slug()),
        }
    }
}
