//! Road routing service port
//!
//! Defines the interface for computing road distance and travel time between
//! two coordinates. Adapters in the infrastructure layer implement this port.

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Road distance and travel time of a single route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    /// Road distance in kilometers
    pub distance_km: f64,
    /// Travel time in minutes
    pub duration_minutes: f64,
}

impl RouteEstimate {
    /// Create a new estimate
    #[must_use]
    pub const fn new(distance_km: f64, duration_minutes: f64) -> Self {
        Self {
            distance_km,
            duration_minutes,
        }
    }
}

/// Port for road routing operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RoutingPort: Send + Sync {
    /// Compute the route from `origin` to `destination`
    ///
    /// Any error means "no route"; callers decide whether to fall back.
    async fn route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteEstimate, ApplicationError>;
}
