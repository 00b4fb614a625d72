//! Custom error types specific to the `adapters` crate.
//!
//! This module defines errors that can occur while talking to the media
//! hosting API or a browser push endpoint, providing a unified error
//! handling mechanism for all outbound service interactions.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Upstream rejected the request: {0}")]
    Upstream(String),

    #[error("Unexpected response body: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
