//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Every variant is an expected outcome of a report request; none of them
/// indicates a bug.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Input rejected before any network call
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The geocoding service answered, but nothing matched the query
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// The geocoding service could not be reached or gave an unusable answer
    #[error("Geocoding service unavailable: {0}")]
    GeocodingUnavailable(String),

    /// A single route could not be computed
    #[error("Routing service unavailable: {0}")]
    RoutingUnavailable(String),

    /// No destination produced a usable leg
    #[error("No route could be computed to any destination")]
    AllRoutesUnavailable,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Message suitable for showing to the person who entered the query
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Domain(DomainError::InvalidQuery(_)) => {
                "Enter at least a place name (the postcode is optional).".to_string()
            },
            Self::Domain(err) => format!("Invalid input: {err}"),
            Self::LocationNotFound(_) => {
                "Could not find this place or postcode. Try only the place name, or add a postcode."
                    .to_string()
            },
            Self::GeocodingUnavailable(_) => {
                "The geocoding service cannot be reached right now. Please try again later."
                    .to_string()
            },
            Self::RoutingUnavailable(_) => {
                "The routing service cannot be reached right now. Please try again later."
                    .to_string()
            },
            Self::AllRoutesUnavailable => {
                "No routes could be computed. Try again later or enable the fallback.".to_string()
            },
            Self::Configuration(msg) => format!("Configuration error: {msg}"),
        }
    }
}
