//! Error types for the pokedex data layer.
//!
//! # Design
//! `ApiError` covers the fetch path: transport failures, non-2xx statuses
//! (carrying the server's status text, no structured error body is parsed),
//! and bodies that fail to deserialize. `NotFound` is a separate type
//! because it is not a fetch failure at all — it is raised by the loaders
//! for bad route parameters before any network call is made, and callers
//! route it to a 404-style outcome rather than a generic failure screen.

use std::fmt;

/// Errors returned by `PokedexClient` operations.
#[derive(Debug)]
pub enum ApiError {
    /// The transport failed before a response was received.
    Network(String),

    /// The server responded with a non-2xx status.
    Http { status: u16, status_text: String },

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Http { status, status_text } => {
                write!(f, "HTTP {status}: {status_text}")
            }
            ApiError::Deserialization(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Route-parameter rejection raised by the loaders before any fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    pub message: String,
}

impl NotFound {
    pub(crate) fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for NotFound {}
