//! Per-session memoisation of geocoding and routing results
//!
//! A [`ReportSession`] is owned by whoever drives one user session and is
//! passed into every report computation of that session. Only successful
//! lookups are remembered; nothing survives the session.

use std::fmt;

use domain::Coordinate;
use moka::future::Cache;

use crate::ports::RouteEstimate;

/// Default number of entries per cache
pub const DEFAULT_SESSION_CAPACITY: u64 = 256;

/// Exact-bits key of an (origin, destination) pair
type RouteKey = [u64; 4];

fn route_key(origin: &Coordinate, destination: &Coordinate) -> RouteKey {
    [
        origin.latitude().to_bits(),
        origin.longitude().to_bits(),
        destination.latitude().to_bits(),
        destination.longitude().to_bits(),
    ]
}

/// Bounded caches scoped to one user session
#[derive(Clone)]
pub struct ReportSession {
    origins: Cache<String, Coordinate>,
    routes: Cache<RouteKey, RouteEstimate>,
}

impl fmt::Debug for ReportSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportSession")
            .field("origins", &self.origins.entry_count())
            .field("routes", &self.routes.entry_count())
            .finish()
    }
}

impl Default for ReportSession {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_CAPACITY)
    }
}

impl ReportSession {
    /// Create a session whose caches hold at most `capacity` entries each
    #[must_use]
    pub fn new(capacity: u64) -> Self {
        Self {
            origins: Cache::builder().max_capacity(capacity).build(),
            routes: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Previously resolved coordinate for exactly this query text
    pub async fn cached_origin(&self, query: &str) -> Option<Coordinate> {
        self.origins.get(query).await
    }

    /// Remember a successful resolution
    pub async fn remember_origin(&self, query: &str, coordinate: Coordinate) {
        self.origins.insert(query.to_string(), coordinate).await;
    }

    /// Previously computed route for exactly this pair
    pub async fn cached_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
    ) -> Option<RouteEstimate> {
        self.routes.get(&route_key(origin, destination)).await
    }

    /// Remember a successful route
    pub async fn remember_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        estimate: RouteEstimate,
    ) {
        self.routes
            .insert(route_key(origin, destination), estimate)
            .await;
    }
}
