//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports with the Nominatim and OSRM clients and
//! provides configuration loading, logging setup and service wiring.

pub mod adapters;
pub mod config;
pub mod service_factory;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, LoggingConfig, ReportConfig, SessionConfig};
pub use service_factory::{build_report_service, new_session};
pub use telemetry::{TelemetryError, init_logging};
