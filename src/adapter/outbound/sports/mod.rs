//! Sports statistics API adapter.

mod client;
mod dto;
pub mod settings;

pub use client::SportsApiClient;
pub use settings::SportsApiConfig;
