//! Error types for outbound fetches, geocoding and routing

use thiserror::Error;

/// Classifies errors that are worth another attempt
pub trait Retryable {
    /// Returns true if the failed operation may succeed when repeated
    fn is_retryable(&self) -> bool;
}

/// Errors from a single HTTP GET, or from the whole retry loop
#[derive(Debug, Error)]
pub enum FetchError {
    /// The attempt did not complete within the per-attempt timeout
    #[error("Request to {url} timed out after {timeout_secs} seconds")]
    Timeout {
        /// Requested URL
        url: String,
        /// Per-attempt timeout
        timeout_secs: u64,
    },

    /// The connection could not be established or was dropped
    #[error("Connection to {url} failed: {message}")]
    ConnectionFailed {
        /// Requested URL
        url: String,
        /// Underlying error message
        message: String,
    },

    /// The service answered with a 5xx status
    #[error("Server error from {url}: HTTP {status}")]
    ServerError {
        /// Requested URL
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// The request could not be built (bad URL, bad header)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Every attempt failed with a transient error
    #[error("Gave up after {attempts} attempts: {last}")]
    Exhausted {
        /// Number of attempts made
        attempts: u32,
        /// Error of the final attempt
        #[source]
        last: Box<FetchError>,
    },
}

impl FetchError {
    /// Number of attempts made, if the retry loop ran to exhaustion
    #[must_use]
    pub const fn attempts(&self) -> Option<u32> {
        match self {
            Self::Exhausted { attempts, .. } => Some(*attempts),
            _ => None,
        }
    }
}

impl Retryable for FetchError {
    fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::ConnectionFailed { .. } | Self::ServerError { .. }
        )
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// The service answered, but nothing matched the query
    #[error("Address not found: {0}")]
    AddressNotFound(String),

    /// The service could not be reached after all retries
    #[error("Geocoding service unreachable: {0}")]
    Transport(#[source] FetchError),

    /// The service answered with a non-success status
    #[error("Geocoding request failed: HTTP {0}")]
    RequestFailed(u16),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),
}

impl GeocodingError {
    /// Whether the outcome is a legitimate "no such place"
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::AddressNotFound(_))
    }
}

/// Errors that can occur during routing; every variant means "no route"
#[derive(Debug, Error)]
pub enum RoutingError {
    /// The service could not be reached after all retries
    #[error("Routing service unreachable: {0}")]
    Transport(#[source] FetchError),

    /// The service answered with a non-success status
    #[error("Routing request failed: HTTP {0}")]
    RequestFailed(u16),

    /// The service answered but reported that no route exists
    #[error("No route found ({code}): {message}")]
    NoRoute {
        /// Service status code, e.g. `NoRoute`
        code: String,
        /// Service message, possibly empty
        message: String,
    },

    /// Failed to parse routing response
    #[error("Routing parse error: {0}")]
    ParseError(String),
}
