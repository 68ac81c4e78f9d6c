//! Adapters (hexagonal edges).
//!
//! - [`inbound`] drives the application (the CLI).
//! - [`outbound`] implements the ports (sports API, favorites indexer).

pub mod inbound;
pub mod outbound;
