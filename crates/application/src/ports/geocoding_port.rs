//! Geocoding service port
//!
//! Resolves a free-text place query to a coordinate. Adapters in the
//! infrastructure layer implement this port using a geocoding API.

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for geocoding operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve a query to the coordinate of its best match
    ///
    /// Returns `Ok(None)` when the service answered but nothing matched.
    /// Returns [`ApplicationError::GeocodingUnavailable`] when the service
    /// could not be reached or gave an unusable answer.
    async fn resolve(&self, query: &str) -> Result<Option<Coordinate>, ApplicationError>;
}
