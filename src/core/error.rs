//! Custom error types for the application.
//!
//! Errors are split by layer:
//!
//! - [`FetchError`] - transport failures of a single HTTP request
//! - [`LoadError`] - what a fetch-and-render cycle reports to its view

use thiserror::Error;

use crate::models::Endpoint;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection reset, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// Invalid response content (not text)
    #[error("Invalid response content")]
    InvalidContent,
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Failure of one fetch-and-render cycle.
///
/// Every variant is rendered inline by the view that issued the request,
/// so the messages are written for end users.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The request never produced a usable body.
    #[error("Could not load {0}")]
    Network(Endpoint, #[source] FetchError),
    /// The body was not the JSON shape the endpoint promises.
    #[error("Unexpected response for {endpoint}: {message}")]
    Parse { endpoint: Endpoint, message: String },
    /// The endpoint answered with an empty list where entries are required.
    #[error("No {0} available")]
    Empty(Endpoint),
}

impl LoadError {
    pub fn parse(endpoint: Endpoint, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            endpoint,
            message: err.to_string(),
        }
    }

    /// Detailed message for logs, including the transport cause.
    pub fn detail(&self) -> String {
        match self {
            Self::Network(_, cause) => format!("{}: {}", self, cause),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            LoadError::Empty(Endpoint::Categories).to_string(),
            "No categories available"
        );
        assert_eq!(
            LoadError::Network(Endpoint::NewOrders, FetchError::Timeout).to_string(),
            "Could not load recent transactions"
        );
    }

    #[test]
    fn test_detail_includes_cause() {
        let err = LoadError::Network(Endpoint::Market, FetchError::HttpError(502));
        assert_eq!(err.detail(), "Could not load market items: HTTP error: 502");
    }

    #[test]
    fn test_parse_constructor() {
        let err = LoadError::parse(Endpoint::Categories, "expected `[`");
        assert_eq!(
            err,
            LoadError::Parse {
                endpoint: Endpoint::Categories,
                message: "expected `[`".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Unexpected response for categories: expected `[`"
        );
    }
}
