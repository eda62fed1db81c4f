//! Application error types using thiserror
//!
//! Error taxonomy:
//! - Invalid input: coordinate rejected before any network activity
//! - Transport failure: network, timeout, or HTTP-level errors
//! - Parse failure: response body lacks the expected version field

use thiserror::Error;

/// Errors that can occur while resolving the latest build version
#[derive(Error, Debug)]
pub enum FetchError {
    /// Coordinate failed validation; no request was issued
    #[error("invalid coordinate '{coordinate}': {reason}")]
    InvalidCoordinate { coordinate: String, reason: String },

    /// No build exists for the coordinate (HTTP 404)
    #[error("no build found for '{coordinate}'")]
    NotFound { coordinate: String },

    /// Network-level request failure
    #[error("failed to fetch latest build for '{coordinate}': {message}")]
    Network { coordinate: String, message: String },

    /// Request exceeded the configured timeout
    #[error("timeout while fetching latest build for '{coordinate}'")]
    Timeout { coordinate: String },

    /// Unexpected non-success HTTP status
    #[error("unexpected HTTP status {status} for '{coordinate}'")]
    Http { coordinate: String, status: u16 },

    /// Response body was not the expected JSON shape
    #[error("invalid response for '{coordinate}': {message}")]
    InvalidResponse { coordinate: String, message: String },

    /// Response parsed but carried no version string
    #[error("response for '{coordinate}' has no version field")]
    MissingVersion { coordinate: String },
}

impl FetchError {
    /// Creates a new InvalidCoordinate error
    pub fn invalid_coordinate(coordinate: impl Into<String>, reason: impl Into<String>) -> Self {
        FetchError::InvalidCoordinate {
            coordinate: coordinate.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new NotFound error
    pub fn not_found(coordinate: impl Into<String>) -> Self {
        FetchError::NotFound {
            coordinate: coordinate.into(),
        }
    }

    /// Creates a new Network error
    pub fn network(coordinate: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::Network {
            coordinate: coordinate.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(coordinate: impl Into<String>) -> Self {
        FetchError::Timeout {
            coordinate: coordinate.into(),
        }
    }

    /// Creates a new Http error
    pub fn http(coordinate: impl Into<String>, status: u16) -> Self {
        FetchError::Http {
            coordinate: coordinate.into(),
            status,
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(coordinate: impl Into<String>, message: impl Into<String>) -> Self {
        FetchError::InvalidResponse {
            coordinate: coordinate.into(),
            message: message.into(),
        }
    }

    /// Creates a new MissingVersion error
    pub fn missing_version(coordinate: impl Into<String>) -> Self {
        FetchError::MissingVersion {
            coordinate: coordinate.into(),
        }
    }

    /// Whether the error occurred before any network activity
    pub fn is_input_error(&self) -> bool {
        matches!(self, FetchError::InvalidCoordinate { .. })
    }
}
