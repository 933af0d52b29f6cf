//! Human-readable and JSON rendering of run reports.

use crate::errors::AppResult;
use crate::models::{SplitReport, StampReport};
use crate::ui::messages::{detail, info, success};
use crate::utils::formatting::{plural, track_label};
use crate::utils::time::secs2readable;
use serde::Serialize;

pub fn print_json<T: Serialize>(report: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn print_split_report(report: &SplitReport) {
    for track in &report.tracks {
        if track.gaps.gaps == 0 {
            detail(format!(
                "Track {}: no gaps above {}s",
                track_label(track.index, track.name.as_deref()),
                report.threshold
            ));
            continue;
        }

        detail(format!(
            "Track {}: {} removed ({}s), {} → {}",
            track_label(track.index, track.name.as_deref()),
            plural(track.gaps.gaps, "gap"),
            track.gaps.seconds,
            plural(track.segments_before, "segment"),
            plural(track.segments_after, "segment"),
        ));
    }

    if report.total.gaps == 0 {
        info("No gaps found, the document is unchanged.");
    } else {
        success(format!(
            "Number of gaps removed: {}, {} seconds ({}).",
            report.total.gaps,
            report.total.seconds,
            secs2readable(report.total.seconds)
        ));
    }
}

pub fn print_stamp_report(report: &StampReport) {
    success(format!(
        "Added timestamps to {} (start {}, every {}s).",
        plural(report.points, "point"),
        report.start,
        report.interval
    ));
}
