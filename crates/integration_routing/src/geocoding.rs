//! Nominatim geocoding client
//!
//! Resolves a free-form Dutch place or postcode query to a coordinate using
//! the [Nominatim](https://nominatim.openstreetmap.org) search API.
//!
//! Requests are spaced by `min_request_interval_ms` (Nominatim allows at most
//! one request per second) and go through [`ResilientFetcher`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use domain::Coordinate;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, instrument};

use crate::config::{FetchConfig, NominatimConfig};
use crate::error::GeocodingError;
use crate::fetch::ResilientFetcher;
use crate::models::NominatimResult;

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Convert a free-form query to the coordinate of its best match
    async fn geocode(&self, query: &str) -> Result<Coordinate, GeocodingError>;
}

/// Nominatim-based geocoding client with request spacing
#[derive(Debug)]
pub struct NominatimGeocodingClient {
    fetcher: ResilientFetcher,
    config: NominatimConfig,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl NominatimGeocodingClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig, fetch: FetchConfig) -> Result<Self, GeocodingError> {
        let fetcher = ResilientFetcher::new(fetch, config.timeout(), &config.user_agent)
            .map_err(GeocodingError::Transport)?;

        Ok(Self {
            fetcher,
            config: config.clone(),
            last_request: Arc::new(Mutex::new(None)),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }

    /// Wait until the configured interval since the previous request has passed
    async fn rate_limit(&self) {
        let interval = Duration::from_millis(self.config.min_request_interval_ms);
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < interval {
                let wait = interval.saturating_sub(elapsed);
                debug!(?wait, "Rate limiting geocoding request");
                tokio::time::sleep(wait).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[async_trait]
impl GeocodingClient for NominatimGeocodingClient {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<Coordinate, GeocodingError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodingError::AddressNotFound(
                "Query must not be empty".to_string(),
            ));
        }

        self.rate_limit().await;

        let url = self.search_url();
        let mut params = vec![("q", query), ("format", "json"), ("limit", "1")];
        if !self.config.country_filter.is_empty() {
            params.push(("countrycodes", self.config.country_filter.as_str()));
        }

        debug!(%query, "Geocoding query");

        let response = self
            .fetcher
            .get(&url, &params, &[("Accept-Language", "nl,en")])
            .await
            .map_err(GeocodingError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodingError::RequestFailed(status.as_u16()));
        }

        let results: Vec<NominatimResult> = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let best = results
            .first()
            .ok_or_else(|| GeocodingError::AddressNotFound(query.to_string()))?;
        let coordinate = best.to_coordinate()?;

        debug!(
            %query,
            %coordinate,
            display_name = best.display_name.as_deref().unwrap_or_default(),
            "Geocoded query"
        );

        Ok(coordinate)
    }
}
