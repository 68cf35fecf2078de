//! Builds the report service from configuration

use std::sync::Arc;

use application::{ApplicationError, DistanceReportService, ReportSession};
use integration_routing::{NominatimGeocodingClient, OsrmRoutingClient};
use tracing::info;

use crate::adapters::{GeocodingAdapter, RoutingAdapter};
use crate::config::AppConfig;

/// Validate the configuration and wire the HTTP clients into the service
///
/// # Errors
///
/// Returns [`ApplicationError::Configuration`] if the configuration is
/// invalid or an HTTP client cannot be created.
pub fn build_report_service(config: &AppConfig) -> Result<DistanceReportService, ApplicationError> {
    config.validate().map_err(ApplicationError::Configuration)?;

    let geocoder = NominatimGeocodingClient::new(&config.geocoding, config.fetch.clone())
        .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
    let router = OsrmRoutingClient::new(&config.routing, config.fetch.clone())
        .map_err(|e| ApplicationError::Configuration(e.to_string()))?;

    info!(
        geocoding = %config.geocoding.base_url,
        routing = %config.routing.base_url,
        destinations = config.destinations.len(),
        "Report service configured"
    );

    Ok(DistanceReportService::new(
        Arc::new(GeocodingAdapter::new(geocoder)),
        Arc::new(RoutingAdapter::new(router)),
        config.destinations.clone(),
    ))
}

/// Fresh session sized per configuration
pub fn new_session(config: &AppConfig) -> ReportSession {
    ReportSession::new(config.session.capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_defaults() {
        let service = build_report_service(&AppConfig::default()).unwrap();
        assert_eq!(service.destinations().len(), 3);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = AppConfig::default();
        config.geocoding.base_url = "ftp://example".to_string();
        let err = build_report_service(&config).unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }
}
