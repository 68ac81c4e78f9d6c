//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the two remote collaborators: the sports
//! statistics API that lists entities, and the favorites indexer.

pub mod entity;
pub mod favorites;
