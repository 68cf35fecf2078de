//! Geocoding adapter - Implements GeocodingPort using integration_routing

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::Coordinate;
use integration_routing::{GeocodingClient, NominatimGeocodingClient};
use tracing::{debug, instrument, warn};

/// Adapter for geocoding via any [`GeocodingClient`], Nominatim by default
#[derive(Debug)]
pub struct GeocodingAdapter<C = NominatimGeocodingClient> {
    client: C,
}

impl<C: GeocodingClient> GeocodingAdapter<C> {
    /// Create a new geocoding adapter
    pub const fn new(client: C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: GeocodingClient> GeocodingPort for GeocodingAdapter<C> {
    #[instrument(skip(self))]
    async fn resolve(&self, query: &str) -> Result<Option<Coordinate>, ApplicationError> {
        match self.client.geocode(query).await {
            Ok(coordinate) => Ok(Some(coordinate)),
            Err(e) if e.is_not_found() => {
                debug!(%query, "No geocoding match");
                Ok(None)
            },
            Err(e) => {
                warn!(%query, error = %e, "Geocoding failed");
                Err(ApplicationError::GeocodingUnavailable(e.to_string()))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use integration_routing::{FetchError, GeocodingError};
    use mockall::mock;

    use super::*;

    mock! {
        Geocoder {}

        #[async_trait]
        impl GeocodingClient for Geocoder {
            async fn geocode(&self, query: &str) -> Result<Coordinate, GeocodingError>;
        }
    }

    #[tokio::test]
    async fn match_is_returned() {
        let mut client = MockGeocoder::new();
        client
            .expect_geocode()
            .returning(|_| Ok(Coordinate::new(52.0277, 5.1683).unwrap()));

        let adapter = GeocodingAdapter::new(client);
        let coordinate = adapter.resolve("Houten").await.unwrap().unwrap();
        assert!((coordinate.latitude() - 52.0277).abs() < 1e-9);
    }

    #[tokio::test]
    async fn no_match_is_none() {
        let mut client = MockGeocoder::new();
        client
            .expect_geocode()
            .returning(|q| Err(GeocodingError::AddressNotFound(q.to_string())));

        let adapter = GeocodingAdapter::new(client);
        assert_eq!(adapter.resolve("Atlantis").await.unwrap(), None);
    }

    #[tokio::test]
    async fn transport_failure_is_unavailable() {
        let mut client = MockGeocoder::new();
        client.expect_geocode().returning(|_| {
            Err(GeocodingError::Transport(FetchError::Exhausted {
                attempts: 3,
                last: Box::new(FetchError::ConnectionFailed {
                    url: "http://nominatim/search".to_string(),
                    message: "refused".to_string(),
                }),
            }))
        });

        let adapter = GeocodingAdapter::new(client);
        let err = adapter.resolve("Houten").await.unwrap_err();
        assert!(matches!(err, ApplicationError::GeocodingUnavailable(_)));
    }

    #[tokio::test]
    async fn unusable_answer_is_unavailable() {
        let mut client = MockGeocoder::new();
        client
            .expect_geocode()
            .returning(|_| Err(GeocodingError::ParseError("Invalid latitude".to_string())));

        let adapter = GeocodingAdapter::new(client);
        let err = adapter.resolve("Houten").await.unwrap_err();
        assert!(matches!(err, ApplicationError::GeocodingUnavailable(_)));
    }
}
