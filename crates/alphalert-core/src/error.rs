//! Error types for the alphalert scorer.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error: {message}")]
    Api { message: String, code: Option<i64> },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unknown chain: {0}")]
    UnknownChain(String),
}

pub type Result<T> = std::result::Result<T, Error>;
