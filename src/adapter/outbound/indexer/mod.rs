//! Favorites indexer adapter.

mod client;
mod dto;
pub mod settings;

pub use client::IndexerClient;
pub use settings::IndexerConfig;
