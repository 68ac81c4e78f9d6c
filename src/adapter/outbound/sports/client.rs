//! Sports statistics REST API client.
//!
//! Speaks the api-sports layout: one host per sport, list endpoints under
//! the host root, filter parameters as query pairs, and the API key in the
//! `x-apisports-key` header. Records are passed through as raw JSON.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;
use tokio::time::sleep;
use tracing::{debug, warn};
use url::Url;

use super::dto::Envelope;
use super::settings::SportsApiConfig;
use crate::error::{Error, Result};
use crate::port::{EntityFetcher, EntityRequest};

const API_KEY_HEADER: &str = "x-apisports-key";
const SOURCE_NAME: &str = "sports-api";

/// HTTP client for the sports statistics API.
pub struct SportsApiClient {
    http: HttpClient,
    config: SportsApiConfig,
}

impl SportsApiClient {
    #[must_use]
    pub fn new(config: SportsApiConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self { http, config }
    }

    /// Full URL for `request`, including query parameters.
    pub fn url_for(&self, request: &EntityRequest) -> Result<Url> {
        let base = format!("{}/{}", self.config.host(request.sport), request.endpoint);
        let mut url = Url::parse(&base)?;
        if !request.params.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.params);
        }
        Ok(url)
    }

    async fn get_with_retry(&self, url: &Url) -> Result<Envelope> {
        let mut attempt = 0;
        let max_attempts = self.config.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let mut builder = self.http.get(url.clone());
            if let Some(key) = &self.config.api_key {
                builder = builder.header(API_KEY_HEADER, key);
            }

            let response = match builder.send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let response = response.error_for_status()?;
            return Ok(response.json::<Envelope>().await?);
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.config.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.config.retry_backoff_ms)).await;
        }
    }
}

/// Unwrap an envelope into its records, turning reported errors into
/// [`Error::Upstream`].
pub(crate) fn into_records(envelope: Envelope) -> Result<Vec<Value>> {
    if let Some(message) = envelope.error_message() {
        return Err(Error::Upstream {
            source_name: SOURCE_NAME,
            message,
        });
    }
    Ok(envelope.response.unwrap_or_default())
}

#[async_trait]
impl EntityFetcher<Value> for SportsApiClient {
    async fn fetch(&self, request: &EntityRequest) -> Result<Vec<Value>> {
        let url = self.url_for(request)?;
        debug!(url = %url, "Fetching entity list");

        let envelope = self.get_with_retry(&url).await?;
        let records = into_records(envelope)?;
        debug!(
            count = records.len(),
            sport = %request.sport,
            "Fetched entity list"
        );
        Ok(records)
    }

    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntityKind, Sport};
    use serde_json::json;

    #[test]
    fn url_includes_endpoint_and_params() {
        let client = SportsApiClient::new(SportsApiConfig::default());
        let request = EntityRequest::new(Sport::Football, EntityKind::Game, "fixtures")
            .with_param("league", "39")
            .with_param("season", "2024");

        let url = client.url_for(&request).unwrap();

        assert_eq!(
            url.as_str(),
            "https://v3.football.api-sports.io/fixtures?league=39&season=2024"
        );
    }

    #[test]
    fn url_without_params_has_no_query() {
        let client = SportsApiClient::new(SportsApiConfig::default());
        let request = EntityRequest::new(Sport::Mma, EntityKind::Category, "categories");
        let url = client.url_for(&request).unwrap();
        assert_eq!(url.query(), None);
        assert_eq!(url.path(), "/categories");
    }

    #[test]
    fn reported_errors_become_upstream() {
        let envelope: Envelope = serde_json::from_value(json!({
            "errors": {"requests": "You have reached the request limit for the day"},
            "response": [],
        }))
        .unwrap();

        assert!(matches!(
            into_records(envelope),
            Err(Error::Upstream { source_name: "sports-api", .. })
        ));
    }

    #[test]
    fn absent_response_is_empty_list() {
        let envelope: Envelope = serde_json::from_value(json!({"errors": []})).unwrap();
        assert_eq!(into_records(envelope).unwrap(), Vec::<Value>::new());
    }
}
