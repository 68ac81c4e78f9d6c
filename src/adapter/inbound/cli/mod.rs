//! CLI module graph.

pub mod catalog;
pub mod command;
pub mod favorite;
pub mod list;
pub mod output;
