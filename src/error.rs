//! Error types at the library boundary.

use std::path::PathBuf;

/// Failure to obtain the catalog from its source.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The endpoint answered with a non-success status.
    #[error("fetch failed: {url} returned {status}")]
    Status { status: u16, url: String },

    /// The request never produced a response.
    #[error("fetch failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not a JSON array of content records.
    #[error("malformed catalog payload: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("parsing config {path}: {source}")]
    Toml { path: PathBuf, source: toml::de::Error },

    #[error("invalid endpoint `{endpoint}`: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("unable to determine config directory")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceRangeError {
    #[error("price bounds must be finite")]
    NotFinite,

    #[error("minimum price {min} exceeds maximum {max}")]
    Inverted { min: f64, max: f64 },
}
