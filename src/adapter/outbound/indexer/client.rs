//! Favorites indexer REST client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response};
use tracing::{debug, warn};
use url::Url;

use super::dto::{CreateFavoriteRequest, ErrorBody, FavoritesResponse};
use super::settings::IndexerConfig;
use crate::domain::{Favorite, FavoriteId, FavoriteScope, NewFavorite, WalletAddress};
use crate::error::{Error, Result};
use crate::port::FavoritesStore;

const SOURCE_NAME: &str = "indexer";

/// HTTP client for the favorites indexer.
pub struct IndexerClient {
    http: HttpClient,
    base_url: Url,
}

impl IndexerClient {
    pub fn new(config: &IndexerConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            base_url: Url::parse(config.base_url.trim_end_matches('/'))?,
        })
    }

    /// `GET /favorites` URL for one wallet and scope.
    pub fn list_url(&self, wallet: &WalletAddress, scope: &FavoriteScope) -> Result<Url> {
        let mut url = self.endpoint(&["favorites"])?;
        url.query_pairs_mut()
            .append_pair("address", wallet.as_str())
            .append_pair("category", &scope.category)
            .append_pair("subcategory", &scope.subcategory)
            .append_pair("type", &scope.kind);
        Ok(url)
    }

    /// `DELETE /favorites/{id}` URL.
    pub fn remove_url(&self, wallet: &WalletAddress, id: &FavoriteId) -> Result<Url> {
        let mut url = self.endpoint(&["favorites", id.as_str()])?;
        url.query_pairs_mut().append_pair("address", wallet.as_str());
        Ok(url)
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Parse(format!("indexer URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Map non-2xx responses to [`Error::Upstream`], using the error body
    /// when the indexer sends one.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.message)
            .unwrap_or(text);
        Err(Error::Upstream {
            source_name: SOURCE_NAME,
            message: format!("{status}: {message}"),
        })
    }
}

#[async_trait]
impl FavoritesStore for IndexerClient {
    async fn list(&self, wallet: &WalletAddress, scope: &FavoriteScope) -> Result<Vec<Favorite>> {
        let url = self.list_url(wallet, scope)?;
        debug!(url = %url, "Fetching favorites");

        let response = Self::check(self.http.get(url).send().await?).await?;
        let body: FavoritesResponse = response.json().await?;
        Ok(body.favorites)
    }

    async fn add(&self, wallet: &WalletAddress, favorite: &NewFavorite) -> Result<Favorite> {
        let url = self.endpoint(&["favorites"])?;
        let body = CreateFavoriteRequest {
            address: wallet,
            favorite,
        };
        debug!(url = %url, item_id = %favorite.item_id, "Creating favorite");

        let response = Self::check(self.http.post(url).json(&body).send().await?).await?;
        Ok(response.json().await?)
    }

    async fn remove(&self, wallet: &WalletAddress, id: &FavoriteId) -> Result<()> {
        let url = self.remove_url(wallet, id)?;
        debug!(url = %url, "Deleting favorite");

        Self::check(self.http.delete(url).send().await?).await?;
        Ok(())
    }

    fn store_name(&self) -> &'static str {
        SOURCE_NAME
    }
}
