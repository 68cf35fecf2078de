//! Distance report use case
//!
//! Resolves the query to an origin, measures every configured destination by
//! road (falling back to the great-circle estimate when routing fails), and
//! ranks the measured legs by travel time.

use std::sync::Arc;

use domain::{Coordinate, Destination, LegResult, LegSource, QueryInput};
use futures::future::join_all;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::session::ReportSession;
use crate::error::ApplicationError;
use crate::ports::{GeocodingPort, RouteEstimate, RoutingPort};

/// Rough travel time per great-circle kilometer (about 55 km/h)
pub const DEFAULT_FALLBACK_MINUTES_PER_KM: f64 = 1.1;

/// Default pass/fail threshold in minutes
pub const DEFAULT_MAX_MINUTES: f64 = 45.0;

/// Limit a leg must stay within to pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "unit", content = "value")]
pub enum Threshold {
    /// Maximum travel time in minutes
    Minutes(f64),
    /// Maximum road distance in kilometers
    Kilometers(f64),
}

impl Default for Threshold {
    fn default() -> Self {
        Self::Minutes(DEFAULT_MAX_MINUTES)
    }
}

impl Threshold {
    /// Whether a measured leg is within the limit; unmeasured legs never pass
    #[must_use]
    pub fn passes(&self, leg: &LegResult) -> bool {
        match self {
            Self::Minutes(max) => leg.duration_minutes().is_some_and(|m| m <= *max),
            Self::Kilometers(max) => leg.distance_km().is_some_and(|km| km <= *max),
        }
    }

    const fn limit(&self) -> f64 {
        match self {
            Self::Minutes(v) | Self::Kilometers(v) => *v,
        }
    }
}

/// Per-request options
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Pass/fail limit
    pub threshold: Threshold,
    /// Whether the formatted report shows pass/fail markers
    pub show_markers: bool,
    /// Use the great-circle estimate when routing fails
    pub fallback_enabled: bool,
    /// Minutes per great-circle kilometer for fallback legs
    pub fallback_minutes_per_km: f64,
    /// Route all destinations concurrently instead of one after another
    pub concurrent_routing: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            threshold: Threshold::default(),
            show_markers: true,
            fallback_enabled: true,
            fallback_minutes_per_km: DEFAULT_FALLBACK_MINUTES_PER_KM,
            concurrent_routing: false,
        }
    }
}

impl ReportOptions {
    /// Validate the options
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric option is negative or not finite.
    pub fn validate(&self) -> Result<(), String> {
        let limit = self.threshold.limit();
        if !limit.is_finite() || limit < 0.0 {
            return Err(format!("threshold must be a non-negative number, got {limit}"));
        }
        if !self.fallback_minutes_per_km.is_finite() || self.fallback_minutes_per_km <= 0.0 {
            return Err(format!(
                "fallback_minutes_per_km must be positive, got {}",
                self.fallback_minutes_per_km
            ));
        }
        Ok(())
    }
}

/// Ranked outcome of one report request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceReport {
    /// Coordinate the legs start from
    pub origin: Coordinate,
    /// Measured legs, ascending by travel time
    pub legs: Vec<LegResult>,
    /// Number of destinations that were not routed (fallback or failed)
    pub non_routed: usize,
    /// Names of destinations without any measurement
    pub failed: Vec<String>,
    /// Whether fallback estimates were allowed for this report
    pub fallback_enabled: bool,
}

impl DistanceReport {
    /// Leg with the shortest travel time
    #[must_use]
    pub fn best(&self) -> Option<&LegResult> {
        self.legs.first()
    }

    /// Number of legs estimated from the great-circle distance
    #[must_use]
    pub fn fallback_count(&self) -> usize {
        self.legs
            .iter()
            .filter(|leg| leg.source() == LegSource::Fallback)
            .count()
    }
}

/// Orchestrates geocoding, routing and ranking for a fixed destination set
pub struct DistanceReportService {
    geocoder: Arc<dyn GeocodingPort>,
    router: Arc<dyn RoutingPort>,
    destinations: Vec<Destination>,
}

impl std::fmt::Debug for DistanceReportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistanceReportService")
            .field("destinations", &self.destinations)
            .finish_non_exhaustive()
    }
}

impl DistanceReportService {
    /// Create a new service
    pub fn new(
        geocoder: Arc<dyn GeocodingPort>,
        router: Arc<dyn RoutingPort>,
        destinations: Vec<Destination>,
    ) -> Self {
        Self {
            geocoder,
            router,
            destinations,
        }
    }

    /// Configured destinations, in configuration order
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Compute the ranked report for one query
    ///
    /// # Errors
    ///
    /// - [`ApplicationError::Configuration`] for invalid options
    /// - [`ApplicationError::LocationNotFound`] when the query matches nothing
    /// - [`ApplicationError::GeocodingUnavailable`] when the geocoder fails
    /// - [`ApplicationError::AllRoutesUnavailable`] when no leg was measured
    #[instrument(skip_all, fields(query = %input))]
    pub async fn compute(
        &self,
        session: &ReportSession,
        input: &QueryInput,
        options: &ReportOptions,
    ) -> Result<DistanceReport, ApplicationError> {
        options.validate().map_err(ApplicationError::Configuration)?;

        let origin = match input {
            QueryInput::Coordinate(coordinate) => *coordinate,
            QueryInput::Text(query) => self.resolve_origin(session, query).await?,
        };

        let legs = if options.concurrent_routing {
            join_all(
                self.destinations
                    .iter()
                    .map(|destination| self.measure_leg(session, origin, destination, options)),
            )
            .await
        } else {
            let mut legs = Vec::with_capacity(self.destinations.len());
            for destination in &self.destinations {
                legs.push(self.measure_leg(session, origin, destination, options).await);
            }
            legs
        };

        let non_routed = legs
            .iter()
            .filter(|leg| leg.source() != LegSource::Routed)
            .count();

        let (mut ranked, unmeasured): (Vec<LegResult>, Vec<LegResult>) =
            legs.into_iter().partition(LegResult::is_measured);

        if ranked.is_empty() {
            warn!(destinations = self.destinations.len(), "No destination could be measured");
            return Err(ApplicationError::AllRoutesUnavailable);
        }

        // Vec::sort_by is stable: equal times keep configuration order
        ranked.sort_by(|a, b| minutes(a).total_cmp(&minutes(b)));

        info!(
            %origin,
            measured = ranked.len(),
            non_routed,
            "Distance report computed"
        );

        Ok(DistanceReport {
            origin,
            legs: ranked,
            non_routed,
            failed: unmeasured
                .iter()
                .map(|leg| leg.destination_name().to_string())
                .collect(),
            fallback_enabled: options.fallback_enabled,
        })
    }

    async fn resolve_origin(
        &self,
        session: &ReportSession,
        query: &str,
    ) -> Result<Coordinate, ApplicationError> {
        if let Some(coordinate) = session.cached_origin(query).await {
            debug!(%query, "Geocoding cache hit");
            return Ok(coordinate);
        }

        let coordinate = self
            .geocoder
            .resolve(query)
            .await?
            .ok_or_else(|| ApplicationError::LocationNotFound(query.to_string()))?;

        session.remember_origin(query, coordinate).await;
        Ok(coordinate)
    }

    async fn route(
        &self,
        session: &ReportSession,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Result<RouteEstimate, ApplicationError> {
        if let Some(estimate) = session.cached_route(origin, destination).await {
            debug!(%destination, "Routing cache hit");
            return Ok(estimate);
        }

        let estimate = self.router.route(origin, destination).await?;
        session.remember_route(origin, destination, estimate).await;
        Ok(estimate)
    }

    async fn measure_leg(
        &self,
        session: &ReportSession,
        origin: Coordinate,
        destination: &Destination,
        options: &ReportOptions,
    ) -> LegResult {
        let name = destination.name.clone();
        match self.route(session, &origin, &destination.coordinate).await {
            Ok(estimate) => {
                LegResult::routed(name, estimate.distance_km, estimate.duration_minutes)
            },
            Err(err) if options.fallback_enabled => {
                let km = origin.distance_km(&destination.coordinate);
                warn!(destination = %name, error = %err, km, "Routing failed, using great-circle fallback");
                LegResult::fallback(name, km, km * options.fallback_minutes_per_km)
            },
            Err(err) => {
                warn!(destination = %name, error = %err, "Routing failed, no fallback");
                LegResult::failed(name)
            },
        }
    }
}

fn minutes(leg: &LegResult) -> f64 {
    leg.duration_minutes().unwrap_or(f64::INFINITY)
}
