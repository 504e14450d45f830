//! Errors on the author loading path
//!
//! None of these reach the page: the dropdown treats every failure as an
//! empty author list.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("response body is not text")]
    NotText,
    #[error("malformed authors payload: {0}")]
    Decode(#[from] serde_json::Error),
}
