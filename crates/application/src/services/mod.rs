//! Application services

mod distance_report;
mod report_formatter;
mod session;

pub use distance_report::{
    DEFAULT_FALLBACK_MINUTES_PER_KM, DEFAULT_MAX_MINUTES, DistanceReport, DistanceReportService,
    ReportOptions, Threshold,
};
pub use report_formatter::{
    format_best_match, format_destinations, format_failure_notice, format_leg_line,
    format_minutes, format_report, format_threshold,
};
pub use session::{DEFAULT_SESSION_CAPACITY, ReportSession};
