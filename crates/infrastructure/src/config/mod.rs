//! Application configuration
//!
//! Layered with the `config` crate: serde defaults, then an optional
//! `config.toml` (or an explicit file), then `AFSTAND_*` environment
//! variables with `__` between nested keys, e.g.
//! `AFSTAND_ROUTING__BASE_URL=http://localhost:5000`.

mod logging;
mod report;

use std::collections::HashSet;
use std::path::Path;

use domain::Destination;
use integration_routing::{FetchConfig, NominatimConfig, OsrmConfig};
use serde::{Deserialize, Serialize};

pub use logging::LoggingConfig;
pub use report::{ReportConfig, SessionConfig};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "AFSTAND";

/// Default config file name, looked up in the working directory
const DEFAULT_CONFIG_FILE: &str = "config";

pub(crate) const fn default_true() -> bool {
    true
}

fn default_destinations() -> Vec<Destination> {
    Destination::defaults()
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Geocoding service configuration
    #[serde(default)]
    pub geocoding: NominatimConfig,

    /// Routing service configuration
    #[serde(default)]
    pub routing: OsrmConfig,

    /// Retry policy for all outbound requests
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Default report options
    #[serde(default)]
    pub report: ReportConfig,

    /// Per-session cache sizing
    #[serde(default)]
    pub session: SessionConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Destinations every query is measured against, in display order
    #[serde(default = "default_destinations")]
    pub destinations: Vec<Destination>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            geocoding: NominatimConfig::default(),
            routing: OsrmConfig::default(),
            fetch: FetchConfig::default(),
            report: ReportConfig::default(),
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
            destinations: default_destinations(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an explicit file (required) or the default
    /// `config.toml` (optional), then apply environment overrides
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with(path, environment_source())
    }

    fn load_with(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        config::Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first problem found, prefixed with its section.
    pub fn validate(&self) -> Result<(), String> {
        self.geocoding
            .validate()
            .map_err(|e| format!("geocoding: {e}"))?;
        self.routing.validate().map_err(|e| format!("routing: {e}"))?;
        self.fetch.validate().map_err(|e| format!("fetch: {e}"))?;
        self.report
            .to_options()
            .validate()
            .map_err(|e| format!("report: {e}"))?;
        self.session.validate().map_err(|e| format!("session: {e}"))?;
        self.validate_destinations()
            .map_err(|e| format!("destinations: {e}"))
    }

    fn validate_destinations(&self) -> Result<(), String> {
        if self.destinations.is_empty() {
            return Err("at least one destination is required".to_string());
        }

        let mut seen = HashSet::new();
        for destination in &self.destinations {
            let name = destination.name.trim();
            if name.is_empty() {
                return Err("destination names must not be empty".to_string());
            }
            if !seen.insert(name) {
                return Err(format!("duplicate destination '{name}'"));
            }
        }
        Ok(())
    }
}

/// `AFSTAND_SECTION__KEY` environment overrides
fn environment_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
