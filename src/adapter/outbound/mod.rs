//! Outbound adapters implementing the ports against remote services.

pub mod indexer;
pub mod sports;
