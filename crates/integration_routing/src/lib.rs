//! Geocoding and road routing integration for Afstand
//!
//! Resolves place queries via [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org)
//! and computes road distance and travel time via an
//! [OSRM](http://project-osrm.org) server.
//!
//! # Architecture
//!
//! Both clients follow the client-trait pattern: [`GeocodingClient`] is
//! implemented by [`NominatimGeocodingClient`], [`RoutingClient`] by
//! [`OsrmRoutingClient`]. Every outbound GET goes through
//! [`ResilientFetcher`], which retries transient failures with linear backoff.
//! The clients hold no result cache; callers memoise per session.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_routing::{FetchConfig, OsrmConfig, OsrmRoutingClient, RoutingClient};
//!
//! let client = OsrmRoutingClient::new(&OsrmConfig::default(), FetchConfig::default())?;
//! let summary = client.route(&origin, &destination).await?;
//! println!("{:.1} km", summary.distance_km);
//! ```

mod config;
mod error;
mod fetch;
mod geocoding;
mod models;
mod routing;

pub use config::{DEFAULT_USER_AGENT, FetchConfig, NominatimConfig, OsrmConfig};
pub use error::{FetchError, GeocodingError, Retryable, RoutingError};
pub use fetch::ResilientFetcher;
pub use geocoding::{GeocodingClient, NominatimGeocodingClient};
pub use models::RouteSummary;
pub use routing::{OsrmRoutingClient, RoutingClient};
