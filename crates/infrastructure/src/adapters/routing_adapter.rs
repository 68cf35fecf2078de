//! Routing adapter - Implements RoutingPort using integration_routing

use application::error::ApplicationError;
use application::ports::{RouteEstimate, RoutingPort};
use async_trait::async_trait;
use domain::Coordinate;
use integration_routing::{OsrmRoutingClient, RoutingClient};
use tracing::instrument;

/// Adapter for road routing via any [`RoutingClient`], OSRM by default
#[derive(Debug)]
pub struct RoutingAdapter<C = OsrmRoutingClient> {
    client: C,
}

impl<C: RoutingClient> RoutingAdapter<C> {
    /// Create a new routing adapter
    pub const fn new(client: C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: RoutingClient> RoutingPort for RoutingAdapter<C> {
    #[instrument(skip(self))]
    async fn route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteEstimate, ApplicationError> {
        let summary = self
            .client
            .route(origin, destination)
            .await
            .map_err(|e| ApplicationError::RoutingUnavailable(e.to_string()))?;

        Ok(RouteEstimate::new(
            summary.distance_km,
            summary.duration_minutes,
        ))
    }
}
