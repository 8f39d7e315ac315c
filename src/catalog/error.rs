//! Error types for catalog requests.

use thiserror::Error;

/// Coarse classification shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure, non-success status, or undecodable body.
    NetworkOrServer,
    /// The request succeeded but no matching entity exists.
    NotFound,
}

/// Errors that can occur while talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP client could not be constructed
    #[error("Failed to build catalog client: {0}")]
    Client(#[source] reqwest::Error),

    /// Base URL or a derived request URL is unusable
    #[error("Invalid catalog URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request never produced a response
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Catalog answered with a non-success status
    #[error("Catalog returned {status} for '{url}'")]
    Status { url: String, status: u16 },

    /// Response body did not match the expected shape
    #[error("Failed to decode response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Product lookup found nothing
    #[error("Product {id} not found")]
    NotFound { id: u64 },

    /// The fetch never reached the worker
    #[error("Fetch could not be dispatched: {0}")]
    Dispatch(String),
}

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NotFound { .. } => ErrorKind::NotFound,
            _ => ErrorKind::NetworkOrServer,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}
