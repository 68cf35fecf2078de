//! Report and session configuration

use application::{
    DEFAULT_FALLBACK_MINUTES_PER_KM, DEFAULT_MAX_MINUTES, DEFAULT_SESSION_CAPACITY, ReportOptions,
    Threshold,
};
use serde::{Deserialize, Serialize};

use super::default_true;

/// Default report options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Pass/fail limit in minutes (default: 45)
    #[serde(default = "default_max_minutes")]
    pub max_minutes: f64,

    /// Pass/fail limit in kilometers; replaces `max_minutes` when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_km: Option<f64>,

    /// Show pass/fail markers
    #[serde(default = "default_true")]
    pub show_markers: bool,

    /// Use the great-circle estimate when routing fails
    #[serde(default = "default_true")]
    pub fallback_enabled: bool,

    /// Minutes per great-circle kilometer for fallback legs (default: 1.1)
    #[serde(default = "default_fallback_minutes_per_km")]
    pub fallback_minutes_per_km: f64,

    /// Route destinations concurrently
    #[serde(default)]
    pub concurrent_routing: bool,
}

const fn default_max_minutes() -> f64 {
    DEFAULT_MAX_MINUTES
}

const fn default_fallback_minutes_per_km() -> f64 {
    DEFAULT_FALLBACK_MINUTES_PER_KM
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_minutes: default_max_minutes(),
            max_km: None,
            show_markers: true,
            fallback_enabled: true,
            fallback_minutes_per_km: default_fallback_minutes_per_km(),
            concurrent_routing: false,
        }
    }
}

impl ReportConfig {
    /// Options for a report request with these defaults
    #[must_use]
    pub fn to_options(&self) -> ReportOptions {
        let threshold = self
            .max_km
            .map_or(Threshold::Minutes(self.max_minutes), Threshold::Kilometers);

        ReportOptions {
            threshold,
            show_markers: self.show_markers,
            fallback_enabled: self.fallback_enabled,
            fallback_minutes_per_km: self.fallback_minutes_per_km,
            concurrent_routing: self.concurrent_routing,
        }
    }
}

/// Per-session cache sizing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum entries per session cache (default: 256)
    #[serde(default = "default_session_capacity")]
    pub capacity: u64,
}

const fn default_session_capacity() -> u64 {
    DEFAULT_SESSION_CAPACITY
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            capacity: default_session_capacity(),
        }
    }
}

impl SessionConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity is zero.
    pub fn validate(&self) -> Result<(), String> {
        if self.capacity == 0 {
            return Err("session capacity must be greater than 0".to_string());
        }
        Ok(())
    }
}
