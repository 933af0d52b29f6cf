//! Synthetic timestamps for documents recorded without time data.

use crate::errors::{AppError, AppResult};
use crate::gpx::tree::Element;
use crate::gpx::{Document, POINT, SEGMENT, TIME};
use crate::utils::time::format_gpx_time;
use chrono::{NaiveDateTime, SubsecRound, TimeDelta, Utc};
use tracing::debug;

/// Start used when none is given: one day before now (UTC), whole seconds.
pub fn default_start() -> NaiveDateTime {
    (Utc::now().naive_utc() - TimeDelta::days(1)).trunc_subsecs(0)
}

/// Appends evenly spaced `time` tags to every track point in document order.
///
/// Existing `time` tags are not checked: stamping a point that already has
/// one leaves it with two. Callers should only stamp unstamped documents.
#[derive(Debug, Clone, Copy)]
pub struct TimestampSynthesizer {
    interval: u32,
    start: NaiveDateTime,
}

impl TimestampSynthesizer {
    pub fn new(interval_seconds: u32) -> Self {
        Self::starting_at(interval_seconds, default_start())
    }

    pub fn starting_at(interval_seconds: u32, start: NaiveDateTime) -> Self {
        Self {
            interval: interval_seconds,
            start,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Timestamp of the `index`-th point, `None` past chrono's range.
    fn timestamp_at(&self, index: usize) -> Option<NaiveDateTime> {
        let offset = i64::try_from(index)
            .ok()?
            .checked_mul(i64::from(self.interval))?;
        self.start.checked_add_signed(TimeDelta::try_seconds(offset)?)
    }

    /// Stamp every point and return how many were stamped.
    ///
    /// Fails without touching the document when the last timestamp would be
    /// out of range.
    pub fn assign(&self, doc: &mut Document) -> AppResult<usize> {
        let total = doc.point_count();
        let last = self
            .timestamp_at(total.saturating_sub(1))
            .ok_or_else(|| {
                AppError::InvalidArgument(format!(
                    "{} points every {}s from {} run past the latest representable time",
                    total,
                    self.interval,
                    format_gpx_time(self.start)
                ))
            })?;

        let mut count = 0;
        for track in doc.tracks_mut() {
            for segment in track.children_named_mut(SEGMENT) {
                for point in segment.children_named_mut(POINT) {
                    // Bounded by `last`, checked above.
                    let timestamp = self.timestamp_at(count).unwrap_or(last);
                    let time = Element::new(point.sibling_name(TIME))
                        .with_text(format_gpx_time(timestamp));
                    point.push_element(time);
                    count += 1;
                }
            }
        }

        debug!(points = count, last = %format_gpx_time(last), "timestamps assigned");
        Ok(count)
    }
}

/// Stamp every point of `doc`, starting one day ago.
pub fn assign_timestamps(doc: &mut Document, interval_seconds: u32) -> AppResult<usize> {
    TimestampSynthesizer::new(interval_seconds).assign(doc)
}

/// Stamp every point of `doc`, starting at `start`.
pub fn assign_timestamps_from(
    doc: &mut Document,
    start: NaiveDateTime,
    interval_seconds: u32,
) -> AppResult<usize> {
    TimestampSynthesizer::starting_at(interval_seconds, start).assign(doc)
}
