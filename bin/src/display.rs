//! Display utilities and output formatting for the lapse CLI.

use lapse_lib::prelude::*;
use lapse_lib::format_delta;

/// Progress bar message for the tracker's current projection.
pub(crate) fn eta_message(tracker: &BoundedOperationTracker) -> String {
    tracker
        .estimated_time_remaining()
        .map_or_else(|| "ETA unknown".to_string(), |remaining| {
            format!("ETA {}", format_delta(remaining))
        })
}

/// Label/value rows describing a snapshot.
pub(crate) fn summary_rows(snapshot: &TrackerSnapshot) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Tracker", snapshot.name.clone()),
        ("State", snapshot.state.to_string()),
        (
            "Completed",
            format!("{}/{}", snapshot.completed, snapshot.total_expected),
        ),
        (
            "Window",
            format!(
                "{}/{}",
                snapshot.window.map_or(0, |stats| stats.count),
                snapshot.capacity
            ),
        ),
        (
            "Remaining fraction",
            format!("{:.1}%", snapshot.percent_complete * 100.0),
        ),
    ];

    if let Some(stats) = snapshot.window {
        rows.push(("Average", format_delta(stats.average)));
        rows.push(("Shortest", format_delta(stats.shortest)));
        rows.push(("Longest", format_delta(stats.longest)));
    }

    rows.push((
        "Time remaining",
        snapshot
            .estimated_time_remaining
            .map_or_else(|| "unknown".to_string(), format_delta),
    ));

    rows
}

/// Print a snapshot as an aligned table.
pub(crate) fn print_summary(snapshot: &TrackerSnapshot) {
    println!();
    for (label, value) in summary_rows(snapshot) {
        println!("{label:<20} {value}");
    }
}
