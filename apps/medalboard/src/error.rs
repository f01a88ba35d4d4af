//! Application error type.

use medalboard_core::MedalboardError;
use thiserror::Error;

/// Errors surfaced by the CLI and the server bootstrap.
///
/// Request handlers never return these to the user as-is: a missing dataset
/// renders the loading state and a missing country redirects.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Dataset(#[from] MedalboardError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("server error: {0}")]
    Server(String),
}
