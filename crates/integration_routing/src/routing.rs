//! OSRM road routing client
//!
//! Queries the Route service of an [OSRM](http://project-osrm.org) server for
//! the road distance and travel time between two coordinates.

use async_trait::async_trait;
use domain::Coordinate;
use tracing::{debug, instrument};

use crate::config::{FetchConfig, OsrmConfig};
use crate::error::RoutingError;
use crate::fetch::ResilientFetcher;
use crate::models::{RouteResponse, RouteSummary};

/// Only the summary is needed; skip geometry and turn-by-turn output
const ROUTE_PARAMS: [(&str, &str); 4] = [
    ("overview", "false"),
    ("alternatives", "false"),
    ("steps", "false"),
    ("annotations", "false"),
];

/// Trait for road routing clients
#[async_trait]
pub trait RoutingClient: Send + Sync {
    /// Road distance and travel time from `origin` to `destination`
    async fn route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteSummary, RoutingError>;
}

/// OSRM-based routing client
#[derive(Debug, Clone)]
pub struct OsrmRoutingClient {
    fetcher: ResilientFetcher,
    config: OsrmConfig,
}

impl OsrmRoutingClient {
    /// Create a new OSRM routing client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &OsrmConfig, fetch: FetchConfig) -> Result<Self, RoutingError> {
        let fetcher = ResilientFetcher::new(fetch, config.timeout(), &config.user_agent)
            .map_err(RoutingError::Transport)?;

        Ok(Self {
            fetcher,
            config: config.clone(),
        })
    }

    /// Build the Route service URL; OSRM expects `lon,lat` order
    fn build_route_url(&self, origin: &Coordinate, destination: &Coordinate) -> String {
        format!(
            "{}/route/v1/{}/{};{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            origin.to_lon_lat(),
            destination.to_lon_lat()
        )
    }
}

#[async_trait]
impl RoutingClient for OsrmRoutingClient {
    #[instrument(skip(self), fields(origin = %origin, destination = %destination))]
    async fn route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteSummary, RoutingError> {
        let url = self.build_route_url(origin, destination);
        debug!(%url, "Requesting route");

        let response = self
            .fetcher
            .get(&url, &ROUTE_PARAMS, &[])
            .await
            .map_err(RoutingError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RoutingError::RequestFailed(status.as_u16()));
        }

        let body: RouteResponse = response
            .json()
            .await
            .map_err(|e| RoutingError::ParseError(e.to_string()))?;

        let summary = body.into_summary()?;
        debug!(
            distance_km = summary.distance_km,
            duration_minutes = summary.duration_minutes,
            "Route computed"
        );

        Ok(summary)
    }
}
