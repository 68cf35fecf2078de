//! Wire formats of the geocoding and routing services
//!
//! See <https://nominatim.org/release-docs/latest/api/Search/> and
//! <http://project-osrm.org/docs/v5.24.0/api/#route-service>.

use domain::Coordinate;
use serde::{Deserialize, Serialize};

use crate::error::{GeocodingError, RoutingError};

/// Road distance and travel time of one route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Road distance in kilometers
    pub distance_km: f64,
    /// Travel time in minutes
    pub duration_minutes: f64,
}

/// One Nominatim search candidate
#[derive(Debug, Deserialize)]
pub(crate) struct NominatimResult {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl NominatimResult {
    /// Parse the string coordinates of this candidate
    pub fn to_coordinate(&self) -> Result<Coordinate, GeocodingError> {
        let lat: f64 = self
            .lat
            .trim()
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid latitude '{}'", self.lat)))?;
        let lon: f64 = self
            .lon
            .trim()
            .parse()
            .map_err(|_| GeocodingError::ParseError(format!("Invalid longitude '{}'", self.lon)))?;

        Coordinate::new(lat, lon).map_err(|e| GeocodingError::ParseError(e.to_string()))
    }
}

/// OSRM Route API response
///
/// The `code` field is `"Ok"` on success; anything else (`"NoRoute"`,
/// `"InvalidQuery"`, ...) means no usable route.
#[derive(Debug, Deserialize)]
pub(crate) struct RouteResponse {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

/// One candidate route; distance in meters, duration in seconds
#[derive(Debug, Deserialize)]
pub(crate) struct OsrmRoute {
    pub distance: f64,
    pub duration: f64,
}

impl RouteResponse {
    /// Check if the response indicates success
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }

    /// Summarise the first route of a successful response
    pub fn into_summary(self) -> Result<RouteSummary, RoutingError> {
        if !self.is_ok() {
            return Err(RoutingError::NoRoute {
                code: self.code,
                message: self.message.unwrap_or_default(),
            });
        }

        let route = self
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| RoutingError::NoRoute {
                code: "Ok".to_string(),
                message: "response contained no routes".to_string(),
            })?;

        if !(route.distance.is_finite() && route.distance >= 0.0)
            || !(route.duration.is_finite() && route.duration >= 0.0)
        {
            return Err(RoutingError::ParseError(format!(
                "invalid route values: distance={} duration={}",
                route.distance, route.duration
            )));
        }

        Ok(RouteSummary {
            distance_km: route.distance / 1000.0,
            duration_minutes: route.duration / 60.0,
        })
    }
}
