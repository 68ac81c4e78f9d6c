use std::sync::Arc;

use thiserror::Error;

use crate::domain::{EntityKind, Sport};

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// The remote service answered, but reported a failure in its payload.
    #[error("{source_name} reported an error: {message}")]
    Upstream {
        source_name: &'static str,
        message: String,
    },

    #[error("favorites mutation requires a wallet address")]
    MissingWallet,

    #[error("no list is defined for {sport} {kind}")]
    UnknownList { sport: Sport, kind: EntityKind },

    #[error("parse error: {0}")]
    Parse(String),

    /// An error held by a query snapshot.
    #[error(transparent)]
    Shared(Arc<Error>),
}

pub type Result<T> = std::result::Result<T, Error>;
