//! Report formatting utilities
//!
//! Pure functions that turn a [`DistanceReport`] into the plain-text report
//! shown to the user.

use domain::{Destination, LegResult, LegSource};

use super::distance_report::{DistanceReport, ReportOptions, Threshold};

const PASS_MARKER: &str = "✅";
const FAIL_MARKER: &str = "❌";

/// Format minutes as `"{m} min"` below an hour, `"{h}h {mm}m"` otherwise
///
/// The value is rounded to whole minutes first; negative values count as 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_minutes(minutes: f64) -> String {
    let total = minutes.max(0.0).round() as u64;
    let (hours, mins) = (total / 60, total % 60);
    if hours == 0 {
        format!("{mins} min")
    } else {
        format!("{hours}h {mins:02}m")
    }
}

/// `"{km:.1} km — {time}"` for a measured leg
fn format_measurement(leg: &LegResult) -> String {
    match (leg.distance_km(), leg.duration_minutes()) {
        (Some(km), Some(minutes)) => format!("{km:.1} km — {}", format_minutes(minutes)),
        _ => "no route".to_string(),
    }
}

/// Headline naming the best match
#[must_use]
pub fn format_best_match(leg: &LegResult) -> String {
    format!(
        "Best match: {} — {}",
        leg.destination_name(),
        format_measurement(leg)
    )
}

/// Notice about legs that could not be routed, if any
#[must_use]
pub fn format_failure_notice(report: &DistanceReport) -> Option<String> {
    if report.non_routed == 0 {
        return None;
    }

    let mut notice = format!(
        "Note: {} route(s) could not be computed by the routing service. ",
        report.non_routed
    );
    if report.fallback_enabled {
        notice.push_str(&format!(
            "The great-circle distance was used as a fallback for {} of them.",
            report.fallback_count()
        ));
    } else {
        notice.push_str("No fallback was used.");
        if !report.failed.is_empty() {
            notice.push_str(&format!(" Missing: {}.", report.failed.join(", ")));
        }
    }
    Some(notice)
}

/// One line per ranked leg
#[must_use]
pub fn format_leg_line(leg: &LegResult, options: &ReportOptions) -> String {
    let mut line = format!("{}: {}", leg.destination_name(), format_measurement(leg));
    if leg.source() == LegSource::Fallback {
        line.push_str(" (fallback)");
    }
    if options.show_markers {
        let marker = if options.threshold.passes(leg) {
            PASS_MARKER
        } else {
            FAIL_MARKER
        };
        line.push_str(&format!("  {marker}"));
    }
    line
}

/// Short description of the active threshold
#[must_use]
pub fn format_threshold(threshold: &Threshold) -> String {
    match threshold {
        Threshold::Minutes(max) => format!("OK up to {}", format_minutes(*max)),
        Threshold::Kilometers(max) => format!("OK up to {max:.1} km"),
    }
}

/// Complete plain-text report
#[must_use]
pub fn format_report(report: &DistanceReport, options: &ReportOptions) -> String {
    let mut parts = Vec::new();

    parts.push("Result (sorted by travel time)".to_string());
    if let Some(best) = report.best() {
        parts.push(format_best_match(best));
    }
    if let Some(notice) = format_failure_notice(report) {
        parts.push(notice);
    }

    parts.push(String::new());
    parts.extend(report.legs.iter().map(|leg| format_leg_line(leg, options)));
    if options.show_markers {
        parts.push(format!("({})", format_threshold(&options.threshold)));
    }

    parts.push(String::new());
    parts.push(
        "Travel times are estimates from a route model without live traffic. \
         They vary with the time of day, but are far more realistic than the straight-line distance."
            .to_string(),
    );

    parts.join("\n")
}

/// Listing of the configured destinations
#[must_use]
pub fn format_destinations(destinations: &[Destination]) -> String {
    destinations
        .iter()
        .map(|d| format!("{} ({})", d.name, d.coordinate))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use domain::Coordinate;

    use super::*;

    fn report(fallback_enabled: bool) -> DistanceReport {
        DistanceReport {
            origin: Coordinate::new(52.0277, 5.1683).unwrap(),
            legs: vec![
                LegResult::fallback("Woerden", 10.0, 11.0),
                LegResult::routed("Vianen", 20.04, 18.2),
                LegResult::fallback("Amersfoort", 50.0, 55.0),
            ],
            non_routed: 2,
            failed: Vec::new(),
            fallback_enabled,
        }
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0.0), "0 min");
        assert_eq!(format_minutes(18.4), "18 min");
        assert_eq!(format_minutes(59.4), "59 min");
        assert_eq!(format_minutes(59.5), "1h 00m");
        assert_eq!(format_minutes(65.0), "1h 05m");
        assert_eq!(format_minutes(135.0), "2h 15m");
        assert_eq!(format_minutes(-3.0), "0 min");
    }

    #[test]
    fn test_best_match_headline() {
        let leg = LegResult::routed("Vianen – Hagenweg 3c", 20.04, 18.2);
        assert_eq!(
            format_best_match(&leg),
            "Best match: Vianen – Hagenweg 3c — 20.0 km — 18 min"
        );
    }

    #[test]
    fn test_leg_line_markers() {
        let options = ReportOptions::default();
        let fallback = LegResult::fallback("Amersfoort", 50.0, 55.0);
        assert_eq!(
            format_leg_line(&fallback, &options),
            "Amersfoort: 50.0 km — 55 min (fallback)  ❌"
        );

        let routed = LegResult::routed("Vianen", 20.0, 45.0);
        assert_eq!(format_leg_line(&routed, &options), "Vianen: 20.0 km — 45 min  ✅");

        let options = ReportOptions {
            show_markers: false,
            ..ReportOptions::default()
        };
        assert_eq!(format_leg_line(&routed, &options), "Vianen: 20.0 km — 45 min");
    }

    #[test]
    fn test_leg_line_kilometer_threshold() {
        let options = ReportOptions {
            threshold: Threshold::Kilometers(25.0),
            ..ReportOptions::default()
        };
        let leg = LegResult::routed("Vianen", 20.0, 90.0);
        assert!(format_leg_line(&leg, &options).ends_with('✅'));
    }

    #[test]
    fn test_failure_notice() {
        assert_eq!(
            format_failure_notice(&report(true)).unwrap(),
            "Note: 2 route(s) could not be computed by the routing service. \
             The great-circle distance was used as a fallback for 2 of them."
        );

        let mut without_fallback = report(false);
        without_fallback.failed = vec!["Woerden".to_string()];
        let notice = format_failure_notice(&without_fallback).unwrap();
        assert!(notice.contains("No fallback"));
        assert!(notice.contains("Woerden"));

        let mut all_routed = report(true);
        all_routed.non_routed = 0;
        assert!(format_failure_notice(&all_routed).is_none());
    }

    #[test]
    fn test_full_report_layout() {
        let text = format_report(&report(true), &ReportOptions::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Result (sorted by travel time)");
        assert_eq!(lines[1], "Best match: Woerden — 10.0 km — 11 min");
        assert!(lines[2].starts_with("Note: 2 route(s)"));
        assert_eq!(lines[4], "Woerden: 10.0 km — 11 min (fallback)  ✅");
        assert_eq!(lines[5], "Vianen: 20.0 km — 18 min  ✅");
        assert_eq!(lines[6], "Amersfoort: 50.0 km — 55 min (fallback)  ❌");
        assert_eq!(lines[7], "(OK up to 45 min)");
        assert!(text.ends_with("straight-line distance."));
    }

    #[test]
    fn test_format_destinations() {
        let text = format_destinations(&Destination::defaults());
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("Vianen – Hagenweg 3c (51.991900, 5.091200)"));
    }
}
