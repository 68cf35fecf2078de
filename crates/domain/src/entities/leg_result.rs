//! Outcome of measuring one origin → destination leg

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the numbers of a leg came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegSource {
    /// Road distance and travel time from the routing service
    Routed,
    /// Great-circle estimate used because routing failed
    Fallback,
    /// Routing failed and no estimate was made
    Failed,
}

impl LegSource {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Routed => "route",
            Self::Fallback => "fallback",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for LegSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Distance and travel time to one destination
///
/// A `Failed` leg never carries numbers; `Routed` and `Fallback` legs always
/// carry both. The constructors are the only way to build one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegResult {
    destination_name: String,
    distance_km: Option<f64>,
    duration_minutes: Option<f64>,
    source: LegSource,
}

impl LegResult {
    /// A leg measured by the routing service
    #[must_use]
    pub fn routed(destination_name: impl Into<String>, distance_km: f64, duration_minutes: f64) -> Self {
        Self {
            destination_name: destination_name.into(),
            distance_km: Some(distance_km),
            duration_minutes: Some(duration_minutes),
            source: LegSource::Routed,
        }
    }

    /// A leg estimated from great-circle distance
    #[must_use]
    pub fn fallback(destination_name: impl Into<String>, distance_km: f64, duration_minutes: f64) -> Self {
        Self {
            destination_name: destination_name.into(),
            distance_km: Some(distance_km),
            duration_minutes: Some(duration_minutes),
            source: LegSource::Fallback,
        }
    }

    /// A leg that could not be measured
    #[must_use]
    pub fn failed(destination_name: impl Into<String>) -> Self {
        Self {
            destination_name: destination_name.into(),
            distance_km: None,
            duration_minutes: None,
            source: LegSource::Failed,
        }
    }

    /// Name of the destination this leg leads to
    #[must_use]
    pub fn destination_name(&self) -> &str {
        &self.destination_name
    }

    /// Distance in kilometers, absent for failed legs
    #[must_use]
    pub const fn distance_km(&self) -> Option<f64> {
        self.distance_km
    }

    /// Travel time in minutes, absent for failed legs
    #[must_use]
    pub const fn duration_minutes(&self) -> Option<f64> {
        self.duration_minutes
    }

    /// Where the numbers came from
    #[must_use]
    pub const fn source(&self) -> LegSource {
        self.source
    }

    /// Whether the leg has usable numbers
    #[must_use]
    pub const fn is_measured(&self) -> bool {
        !matches!(self.source, LegSource::Failed)
    }
}
