//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Latitude or longitude outside the valid range
    #[error(
        "Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates {
        /// Rejected latitude
        latitude: f64,
        /// Rejected longitude
        longitude: f64,
    },

    /// Coordinate text could not be parsed as `lat,lon`
    #[error("Malformed coordinates '{0}': expected 'latitude,longitude'")]
    MalformedCoordinates(String),

    /// The query input is empty or otherwise unusable
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl DomainError {
    /// Create an invalid coordinates error
    pub const fn invalid_coordinates(latitude: f64, longitude: f64) -> Self {
        Self::InvalidCoordinates {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinates_mentions_values() {
        let err = DomainError::invalid_coordinates(91.0, 5.0);
        let msg = err.to_string();
        assert!(msg.contains("91"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn malformed_coordinates_display() {
        let err = DomainError::MalformedCoordinates("abc".to_string());
        assert!(err.to_string().contains("abc"));
    }
}
