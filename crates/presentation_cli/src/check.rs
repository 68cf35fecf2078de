//! The `check` command: one distance report

use application::{ReportOptions, Threshold};
use clap::Args;
use domain::{DomainError, QueryInput};
use infrastructure::ReportConfig;

/// Arguments of the `check` command
#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// Place name, e.g. "Houten"
    #[arg(short, long)]
    pub place: Option<String>,

    /// Postcode (optional), e.g. "3992"
    #[arg(long)]
    pub postcode: Option<String>,

    /// Raw coordinates "lat,lon" instead of a place
    #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["place", "postcode"])]
    pub coords: Option<String>,

    /// Travel time limit in minutes for the pass/fail marker
    #[arg(long, conflicts_with = "max_km")]
    pub max_minutes: Option<f64>,

    /// Road distance limit in kilometers for the pass/fail marker
    #[arg(long)]
    pub max_km: Option<f64>,

    /// Hide pass/fail markers
    #[arg(long)]
    pub no_markers: bool,

    /// Drop destinations that cannot be routed instead of estimating them
    #[arg(long)]
    pub no_fallback: bool,

    /// Route all destinations concurrently
    #[arg(long)]
    pub concurrent: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckArgs {
    /// Query built from the arguments, validated before any network call
    pub fn query_input(&self) -> Result<QueryInput, DomainError> {
        if let Some(coords) = &self.coords {
            return QueryInput::parse_coordinates(coords);
        }
        QueryInput::from_place(
            self.place.as_deref().unwrap_or_default(),
            self.postcode.as_deref(),
        )
    }

    /// Configured report defaults with command-line overrides applied
    pub fn report_options(&self, defaults: &ReportConfig) -> ReportOptions {
        let mut options = defaults.to_options();

        if let Some(max_km) = self.max_km {
            options.threshold = Threshold::Kilometers(max_km);
        } else if let Some(max_minutes) = self.max_minutes {
            options.threshold = Threshold::Minutes(max_minutes);
        }
        if self.no_markers {
            options.show_markers = false;
        }
        if self.no_fallback {
            options.fallback_enabled = false;
        }
        if self.concurrent {
            options.concurrent_routing = true;
        }
        options
    }
}
