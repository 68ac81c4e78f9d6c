//! Entity listing port.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::{EntityKind, Sport};
use crate::error::Result;

/// A single list query against the sports statistics API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRequest {
    pub sport: Sport,
    pub kind: EntityKind,
    /// Path segment of the list endpoint, e.g. `leagues` or `fixtures`.
    pub endpoint: String,
    /// Filter parameters passed through as query string pairs.
    pub params: BTreeMap<String, String>,
}

impl EntityRequest {
    pub fn new(sport: Sport, kind: EntityKind, endpoint: impl Into<String>) -> Self {
        Self {
            sport,
            kind,
            endpoint: endpoint.into(),
            params: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: BTreeMap<String, String>) -> Self {
        self.params = params;
        self
    }

    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Source of entity lists.
///
/// `E` is the entity representation the fetcher yields; the HTTP adapter
/// yields raw JSON records.
#[async_trait]
pub trait EntityFetcher<E>: Send + Sync {
    /// Fetch the full list for `request`.
    async fn fetch(&self, request: &EntityRequest) -> Result<Vec<E>>;

    /// Source name for logging/debugging.
    fn source_name(&self) -> &'static str;
}
