//! Fanboard - favorite-annotated sports lists.
//!
//! This crate fetches sports entities (leagues, teams, games, fighters,
//! weight categories) from the api-sports family of APIs and annotates each
//! one with whether a wallet has marked it as a favorite in an external
//! indexer.
//!
//! # Architecture
//!
//! - **`domain`** - Sports, entity kinds, ids and favorite records
//! - **`port`** - Outbound traits: `EntityFetcher`, `FavoritesStore`
//! - **`application`** - Query cells and the generic `FavoriteList`
//! - **`catalog`** - The twenty supported (sport, kind) lists
//! - **`adapter`** - HTTP clients for the APIs and the `fanboard` CLI
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files and the environment
//! - [`domain`] - Plain data types
//! - [`error`] - Error types for the crate
//! - [`testkit`] - In-memory ports for tests (requires `testkit` feature)
//!
//! # Features
//!
//! - `testkit` - Expose the in-memory fetcher and favorites store
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use fanboard::adapter::outbound::indexer::IndexerClient;
//! use fanboard::adapter::outbound::sports::SportsApiClient;
//! use fanboard::catalog::{Catalog, EntityKind, ListOptions, Sport};
//! use fanboard::config::Config;
//! use fanboard::domain::WalletAddress;
//!
//! # async fn demo() -> fanboard::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let catalog = Catalog::standard();
//! let spec = catalog.require(Sport::Basketball, EntityKind::Team)?;
//!
//! let list = spec.build(
//!     Arc::new(SportsApiClient::new(config.sports_api.clone())),
//!     Arc::new(IndexerClient::new(&config.indexer)?),
//!     Some(WalletAddress::from("0xfan")),
//!     ListOptions::default().with_param("league", "12"),
//! );
//! list.refresh().await;
//! list.set_favorited("145", true).await?;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
