//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │  queries + annotation   │
//!                    └───────────┬─────────────┘
//!                                │
//!              ┌─────────────────┴─────────────────┐
//!              ▼                                   ▼
//!      ┌───────────────┐                  ┌─────────────────┐
//!      │ EntityFetcher │                  │ FavoritesStore  │
//!      │ (sports API)  │                  │   (indexer)     │
//!      └───────────────┘                  └─────────────────┘
//! ```

pub mod outbound;

pub use outbound::entity::{EntityFetcher, EntityRequest};
pub use outbound::favorites::FavoritesStore;
